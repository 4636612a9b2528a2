use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqliteExecutor};

use crate::utils::database::Insertion;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    pub sub_category_id: Option<i64>,
    pub image_link: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateDishPayload {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    pub sub_category_id: Option<i64>,
    pub image_link: Option<String>,
}

pub type UpdateDishPayload = CreateDishPayload;

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
    payload: CreateDishPayload,
) -> Result<Insertion<Dish>, Error> {
    let inserted = sqlx::query_as::<_, Dish>(
        "
        INSERT INTO dishes (name, price, category_id, sub_category_id, image_link)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT (name, category_id) DO NOTHING
        RETURNING *
        ",
    )
    .bind(&payload.name)
    .bind(payload.price)
    .bind(payload.category_id)
    .bind(payload.sub_category_id)
    .bind(&payload.image_link)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating dish {}: {}", payload.name, err);
        Error::UnexpectedError
    })?;

    if let Some(dish) = inserted {
        return Ok(Insertion::Created(dish));
    }

    sqlx::query_as::<_, Dish>("SELECT * FROM dishes WHERE name = ? AND category_id = ?")
        .bind(&payload.name)
        .bind(payload.category_id)
        .fetch_one(&mut *conn)
        .await
        .map(Insertion::AlreadyExists)
        .map_err(|err| {
            tracing::error!(
                "Dish {} conflicted but could not be fetched: {}",
                payload.name,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<Option<Dish>, Error> {
    sqlx::query_as::<_, Dish>("SELECT * FROM dishes WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching dish with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(
    e: E,
    filters: Filters,
) -> Result<Vec<Dish>, Error> {
    sqlx::query_as::<_, Dish>(
        "
        SELECT * FROM dishes
        WHERE category_id = COALESCE(?, category_id)
        ORDER BY id
        ",
    )
    .bind(filters.category_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many dishes: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count_by_sub_category_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    sub_category_id: i64,
) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dishes WHERE sub_category_id = ?")
        .bind(sub_category_id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while counting dishes of sub-category {}: {}",
                sub_category_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateDishPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE dishes SET
            name = ?,
            price = ?,
            category_id = ?,
            sub_category_id = ?,
            image_link = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        ",
    )
    .bind(payload.name)
    .bind(payload.price)
    .bind(payload.category_id)
    .bind(payload.sub_category_id)
    .bind(payload.image_link)
    .bind(id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| match err {
        sqlx::Error::Database(err) if err.is_unique_violation() => Error::NameTaken,
        err => {
            tracing::error!(
                "Error occurred while trying to update a dish by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        }
    })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<(), Error> {
    sqlx::query("DELETE FROM dishes WHERE id = ?")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a dish by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
