use super::types::{request, response};
use crate::modules::{dish, order::repository, user};
use sqlx::SqliteConnection;
use validator::Validate;

pub async fn service(conn: &mut SqliteConnection, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    user::repository::find_by_id(&mut *conn, payload.user_id)
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?
        .ok_or(response::Error::UserNotFound)?;

    dish::repository::find_by_id(&mut *conn, payload.dish_id)
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?
        .ok_or(response::Error::DishNotFound)?;

    let order = repository::create(
        &mut *conn,
        repository::CreateOrderPayload {
            description: payload.description,
            user_id: payload.user_id,
            dish_id: payload.dish_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)?;

    tracing::info!(
        "Order {} placed by user {} for dish {}",
        order.id,
        order.user_id,
        order.dish_id
    );

    Ok(response::Success::OrderCreated(order))
}
