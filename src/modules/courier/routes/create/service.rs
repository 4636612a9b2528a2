use super::types::{request, response};
use crate::{
    modules::user::repository::{self, Role},
    utils::database::Insertion,
};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let insertion = repository::create(
        conn,
        repository::CreateUserPayload {
            name: payload.name,
            phone: payload.phone,
            role: Role::Courier,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateCourier)?;

    Ok(match insertion {
        Insertion::Created(courier) => response::Success::CourierCreated(courier),
        Insertion::AlreadyExists(courier) => response::Success::CourierAlreadyExists(courier),
    })
}
