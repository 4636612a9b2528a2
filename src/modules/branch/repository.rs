use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqliteExecutor};

use crate::utils::database::Insertion;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateBranchPayload {
    pub name: String,
    pub address: String,
    pub phone: String,
}

pub type UpdateBranchPayload = CreateBranchPayload;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    NameTaken,
}

pub async fn create(
    conn: &mut SqliteConnection,
    payload: CreateBranchPayload,
) -> Result<Insertion<Branch>, Error> {
    let inserted = sqlx::query_as::<_, Branch>(
        "
        INSERT INTO branches (name, address, phone)
        VALUES (?, ?, ?)
        ON CONFLICT (name) DO NOTHING
        RETURNING *
        ",
    )
    .bind(&payload.name)
    .bind(&payload.address)
    .bind(&payload.phone)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating branch {}: {}", payload.name, err);
        Error::UnexpectedError
    })?;

    match inserted {
        Some(branch) => Ok(Insertion::Created(branch)),
        None => sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE name = ?")
            .bind(&payload.name)
            .fetch_one(&mut *conn)
            .await
            .map(Insertion::AlreadyExists)
            .map_err(|err| {
                tracing::error!(
                    "Branch {} conflicted but could not be fetched: {}",
                    payload.name,
                    err
                );
                Error::UnexpectedError
            }),
    }
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<Option<Branch>, Error> {
    sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching branch with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(e: E) -> Result<Vec<Branch>, Error> {
    sqlx::query_as::<_, Branch>("SELECT * FROM branches ORDER BY id")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many branches: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateBranchPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE branches SET
            name = ?,
            address = ?,
            phone = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        ",
    )
    .bind(payload.name)
    .bind(payload.address)
    .bind(payload.phone)
    .bind(id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| match err {
        sqlx::Error::Database(err) if err.is_unique_violation() => Error::NameTaken,
        err => {
            tracing::error!(
                "Error occurred while trying to update a branch by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        }
    })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<(), Error> {
    sqlx::query("DELETE FROM branches WHERE id = ?")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a branch by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
