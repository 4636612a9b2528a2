use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use sqlx::{SqliteConnection, SqliteExecutor};

use crate::utils::database::Insertion;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct PromoCode {
    pub id: i64,
    pub code: String,
    pub discount: f64,
    #[serde(serialize_with = "serialize_as_base64")]
    pub qr_code: Vec<u8>,
    pub created_at: NaiveDateTime,
}

fn serialize_as_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64_STANDARD.encode(bytes))
}

pub struct CreatePromoCodePayload {
    pub code: String,
    pub discount: f64,
    pub qr_code: Vec<u8>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Stores a promo code with its pre-rendered QR image. An existing row with
/// the same code is returned untouched, QR image included.
pub async fn create(
    conn: &mut SqliteConnection,
    payload: CreatePromoCodePayload,
) -> Result<Insertion<PromoCode>, Error> {
    let inserted = sqlx::query_as::<_, PromoCode>(
        "
        INSERT INTO promo_codes (code, discount, qr_code)
        VALUES (?, ?, ?)
        ON CONFLICT (code) DO NOTHING
        RETURNING *
        ",
    )
    .bind(&payload.code)
    .bind(payload.discount)
    .bind(&payload.qr_code)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating promo code {}: {}", payload.code, err);
        Error::UnexpectedError
    })?;

    if let Some(promo_code) = inserted {
        return Ok(Insertion::Created(promo_code));
    }

    sqlx::query_as::<_, PromoCode>("SELECT * FROM promo_codes WHERE code = ?")
        .bind(&payload.code)
        .fetch_one(&mut *conn)
        .await
        .map(Insertion::AlreadyExists)
        .map_err(|err| {
            tracing::error!(
                "Promo code {} conflicted but could not be fetched: {}",
                payload.code,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(
    e: E,
    id: i64,
) -> Result<Option<PromoCode>, Error> {
    sqlx::query_as::<_, PromoCode>("SELECT * FROM promo_codes WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching promo code with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(e: E) -> Result<Vec<PromoCode>, Error> {
    sqlx::query_as::<_, PromoCode>("SELECT * FROM promo_codes ORDER BY id")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many promo codes: {}", err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<(), Error> {
    sqlx::query("DELETE FROM promo_codes WHERE id = ?")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a promo code by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
