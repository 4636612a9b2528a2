use super::types::{request, response};
use crate::modules::sub_category::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    repository::find_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteSubCategory)?
        .ok_or(response::Error::SubCategoryNotFound)?;

    repository::delete_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteSubCategory)
        .map(|_| response::Success::SubCategoryDeleted)
}
