use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqliteExecutor};

use crate::utils::database::Insertion;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct SubCategory {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateSubCategoryPayload {
    pub name: String,
    pub category_id: i64,
}

pub struct UpdateSubCategoryPayload {
    pub name: String,
    pub category_id: i64,
}

#[derive(Default)]
pub struct Filters {
    pub category_id: Option<i64>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    NameTaken,
}

pub async fn create(
    conn: &mut SqliteConnection,
    payload: CreateSubCategoryPayload,
) -> Result<Insertion<SubCategory>, Error> {
    let inserted = sqlx::query_as::<_, SubCategory>(
        "
        INSERT INTO sub_categories (name, category_id)
        VALUES (?, ?)
        ON CONFLICT (name, category_id) DO NOTHING
        RETURNING *
        ",
    )
    .bind(&payload.name)
    .bind(payload.category_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating sub-category {}: {}",
            payload.name,
            err
        );
        Error::UnexpectedError
    })?;

    if let Some(sub_category) = inserted {
        return Ok(Insertion::Created(sub_category));
    }

    sqlx::query_as::<_, SubCategory>(
        "SELECT * FROM sub_categories WHERE name = ? AND category_id = ?",
    )
    .bind(&payload.name)
    .bind(payload.category_id)
    .fetch_one(&mut *conn)
    .await
    .map(Insertion::AlreadyExists)
    .map_err(|err| {
        tracing::error!(
            "Sub-category {} conflicted but could not be fetched: {}",
            payload.name,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<SubCategory>, Error> {
    sqlx::query_as::<_, SubCategory>("SELECT * FROM sub_categories WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching sub-category with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(
    e: E,
    filters: Filters,
) -> Result<Vec<SubCategory>, Error> {
    sqlx::query_as::<_, SubCategory>(
        "
        SELECT * FROM sub_categories
        WHERE category_id = COALESCE(?, category_id)
        ORDER BY id
        ",
    )
    .bind(filters.category_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch many sub-categories: {}",
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateSubCategoryPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE sub_categories SET
            name = ?,
            category_id = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        ",
    )
    .bind(payload.name)
    .bind(payload.category_id)
    .bind(id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| match err {
        sqlx::Error::Database(err) if err.is_unique_violation() => Error::NameTaken,
        err => {
            tracing::error!(
                "Error occurred while trying to update a sub-category by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        }
    })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<(), Error> {
    sqlx::query("DELETE FROM sub_categories WHERE id = ?")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a sub-category by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
