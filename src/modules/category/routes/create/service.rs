use super::types::{request, response};
use crate::{modules::category::repository, utils::database::Insertion};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        conn,
        repository::CreateCategoryPayload { name: payload.name },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateCategory)
    .map(|insertion| match insertion {
        Insertion::Created(category) => response::Success::CategoryCreated(category),
        Insertion::AlreadyExists(category) => response::Success::CategoryAlreadyExists(category),
    })
}
