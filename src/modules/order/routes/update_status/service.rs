use super::types::{request, response};
use crate::modules::order::repository::{self, OrderStatus};
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    let status = payload.body.status.parse::<OrderStatus>().map_err(|err| {
        tracing::warn!("Rejected status for order {}: {}", payload.id, err);
        response::Error::InvalidStatus
    })?;

    let order = repository::find_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::OrderNotFound)?;

    repository::update_status_by_id(&mut *conn, payload.id, status)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?;

    tracing::info!(
        "Order {} moved from {} to {}",
        payload.id,
        order.status,
        status
    );

    Ok(response::Success::OrderStatusUpdated(status))
}
