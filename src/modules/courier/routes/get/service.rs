use super::types::{request, response};
use crate::modules::user::repository::{self, Role};
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    repository::find_by_id_and_role(conn, payload.id, Role::Courier)
        .await
        .map_err(|_| response::Error::FailedToFetchCourier)?
        .ok_or(response::Error::CourierNotFound)
        .map(response::Success::Courier)
}
