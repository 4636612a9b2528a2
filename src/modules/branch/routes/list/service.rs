use super::types::response;
use crate::modules::branch::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection) -> response::Response {
    repository::find_many(conn)
        .await
        .map_err(|_| response::Error::FailedToFetchBranches)
        .map(response::Success::Branches)
}
