use super::types::{request, response};
use crate::{modules::user::repository, utils::database::Insertion};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let role = payload.role.parse::<repository::Role>().map_err(|err| {
        tracing::warn!("{}", err);
        response::Error::InvalidRole
    })?;

    let insertion = repository::create(
        conn,
        repository::CreateUserPayload {
            name: payload.name,
            phone: payload.phone,
            role,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateUser)?;

    Ok(match insertion {
        Insertion::Created(user) => response::Success::UserCreated(user),
        Insertion::AlreadyExists(user) => response::Success::UserAlreadyExists(user),
    })
}
