use super::types::response;
use crate::modules::user::repository::{self, Role};
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection) -> response::Response {
    repository::find_many(
        conn,
        repository::Filters {
            role: Some(Role::Courier),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchCouriers)
    .map(response::Success::Couriers)
}
