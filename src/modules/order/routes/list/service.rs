use super::types::response;
use crate::modules::order::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection) -> response::Response {
    repository::find_many_with_details(conn)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)
        .map(response::Success::Orders)
}
