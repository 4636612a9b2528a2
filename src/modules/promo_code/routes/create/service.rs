use super::types::{request, response};
use crate::{
    modules::promo_code::repository,
    utils::{database::Insertion, qr},
};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let qr_code = qr::generate(&payload.code).map_err(response::Error::FailedToGenerateQrCode)?;

    let insertion = repository::create(
        conn,
        repository::CreatePromoCodePayload {
            code: payload.code,
            discount: payload.discount,
            qr_code,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreatePromoCode)?;

    Ok(match insertion {
        Insertion::Created(promo_code) => response::Success::PromoCodeCreated(promo_code),
        Insertion::AlreadyExists(promo_code) => {
            response::Success::PromoCodeAlreadyExists(promo_code)
        }
    })
}
