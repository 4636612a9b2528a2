use super::types::{request, response};
use crate::{modules::branch::repository, utils::database::Insertion};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let insertion = repository::create(
        conn,
        repository::CreateBranchPayload {
            name: payload.name,
            address: payload.address,
            phone: payload.phone,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateBranch)?;

    Ok(match insertion {
        Insertion::Created(branch) => response::Success::BranchCreated(branch),
        Insertion::AlreadyExists(branch) => response::Success::BranchAlreadyExists(branch),
    })
}
