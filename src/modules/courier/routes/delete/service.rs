use super::types::{request, response};
use crate::modules::user::repository::{self, Role};
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection, payload: request::Payload) -> response::Response {
    repository::find_by_id_and_role(&mut *conn, payload.id, Role::Courier)
        .await
        .map_err(|_| response::Error::FailedToDeleteCourier)?
        .ok_or(response::Error::CourierNotFound)?;

    repository::delete_by_id(&mut *conn, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteCourier)
        .map(|_| response::Success::CourierDeleted)
}
