use super::types::{request, response};
use crate::modules::promo_code::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    repository::find_by_id(conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchPromoCode)?
        .ok_or(response::Error::PromoCodeNotFound)
        .map(|promo_code| response::Success::QrCode(promo_code.qr_code))
}
