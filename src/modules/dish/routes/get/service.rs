use super::types::{request, response};
use crate::modules::dish::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    repository::find_by_id(conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchDish)?
        .ok_or(response::Error::DishNotFound)
        .map(response::Success::Dish)
}
