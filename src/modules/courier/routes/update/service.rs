use super::types::{request, response};
use crate::modules::user::repository::{self, Role};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::find_by_id_and_role(&mut *conn, payload.id, Role::Courier)
        .await
        .map_err(|_| response::Error::FailedToUpdateCourier)?
        .ok_or(response::Error::CourierNotFound)?;

    repository::update_by_id(
        &mut *conn,
        payload.id,
        repository::UpdateUserPayload {
            name: payload.body.name,
            phone: payload.body.phone,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::PhoneTaken => response::Error::CourierPhoneTaken,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateCourier,
    })
    .map(|_| response::Success::CourierUpdated)
}
