use super::types::{request, response};
use crate::modules::branch::repository;
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::find_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateBranch)?
        .ok_or(response::Error::BranchNotFound)?;

    repository::update_by_id(
        &mut *conn,
        payload.id,
        repository::UpdateBranchPayload {
            name: payload.body.name,
            address: payload.body.address,
            phone: payload.body.phone,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::NameTaken => response::Error::BranchNameTaken,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateBranch,
    })
    .map(|_| response::Success::BranchUpdated)
}
