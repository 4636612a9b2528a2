use super::types::{request, response};
use crate::modules::user::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, filters: request::Filters) -> response::Response {
    repository::find_many(conn, repository::Filters { role: filters.role })
        .await
        .map_err(|_| response::Error::FailedToFetchUsers)
        .map(response::Success::Users)
}
