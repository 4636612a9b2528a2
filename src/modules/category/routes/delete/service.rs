use super::types::{request, response};
use crate::modules::category::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    repository::find_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteCategory)?
        .ok_or(response::Error::CategoryNotFound)?;

    // dishes and sub-categories keep pointing at the removed id
    repository::delete_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteCategory)
        .map(|_| response::Success::CategoryDeleted)
}
