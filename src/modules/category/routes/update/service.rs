use super::types::{request, response};
use crate::modules::category::repository;
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::find_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateCategory)?
        .ok_or(response::Error::CategoryNotFound)?;

    repository::update_by_id(
        &mut *conn,
        payload.id,
        repository::UpdateCategoryPayload {
            name: payload.body.name,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::NameTaken => response::Error::CategoryNameTaken,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateCategory,
    })
    .map(|_| response::Success::CategoryUpdated)
}
