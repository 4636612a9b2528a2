use super::types::{request, response};
use crate::modules::promo_code::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    repository::find_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeletePromoCode)?
        .ok_or(response::Error::PromoCodeNotFound)?;

    repository::delete_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeletePromoCode)
        .map(|_| response::Success::PromoCodeDeleted)
}
