use super::types::response;
use crate::modules::promo_code::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection) -> response::Response {
    repository::find_many(conn)
        .await
        .map_err(|_| response::Error::FailedToFetchPromoCodes)
        .map(response::Success::PromoCodes)
}
