use super::types::{request, response};
use crate::modules::dish::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    repository::find_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteDish)?
        .ok_or(response::Error::DishNotFound)?;

    // orders keep pointing at the removed dish
    repository::delete_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteDish)
        .map(|_| response::Success::DishDeleted)
}
