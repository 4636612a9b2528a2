use super::types::{request, response};
use crate::modules::dish::repository;
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, filters: request::Filters) -> response::Response {
    repository::find_many(
        conn,
        repository::Filters {
            category_id: filters.category_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchDishes)
    .map(response::Success::Dishes)
}
