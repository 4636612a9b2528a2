use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqliteExecutor};

use crate::utils::database::Insertion;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateCategoryPayload {
    pub name: String,
}

pub struct UpdateCategoryPayload {
    pub name: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    NameTaken,
}

pub async fn create(
    conn: &mut SqliteConnection,
    payload: CreateCategoryPayload,
) -> Result<Insertion<Category>, Error> {
    let inserted = sqlx::query_as::<_, Category>(
        "
        INSERT INTO categories (name)
        VALUES (?)
        ON CONFLICT (name) DO NOTHING
        RETURNING *
        ",
    )
    .bind(&payload.name)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating category {}: {}", payload.name, err);
        Error::UnexpectedError
    })?;

    if let Some(category) = inserted {
        return Ok(Insertion::Created(category));
    }

    find_by_name(&mut *conn, payload.name.clone())
        .await?
        .map(Insertion::AlreadyExists)
        .ok_or_else(|| {
            tracing::error!("Category {} conflicted but could not be found", payload.name);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<Category>, Error> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching category with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_name<'e, E: SqliteExecutor<'e>>(
    e: E,
    name: String,
) -> Result<Option<Category>, Error> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE name = ?")
        .bind(&name)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching category named {}: {}", name, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(e: E) -> Result<Vec<Category>, Error> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many categories: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateCategoryPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE categories SET
            name = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        ",
    )
    .bind(payload.name)
    .bind(id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| match err {
        sqlx::Error::Database(err) if err.is_unique_violation() => Error::NameTaken,
        err => {
            tracing::error!(
                "Error occurred while trying to update a category by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        }
    })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<(), Error> {
    sqlx::query("DELETE FROM categories WHERE id = ?")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a category by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
