use super::types::{request, response};
use crate::modules::order::repository::{self, OrderStatus};
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    let updated = repository::update_status_by_id(conn, payload.id, OrderStatus::InKitchen)
        .await
        .map_err(|_| response::Error::FailedToSendOrderToKitchen)?;

    // an unknown id is not an error here
    match updated {
        true => tracing::info!("Order {} sent to the kitchen", payload.id),
        false => tracing::debug!("No order {} to send to the kitchen", payload.id),
    }

    Ok(response::Success::OrderSentToKitchen { updated })
}
