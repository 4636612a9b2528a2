use super::types::response;
use crate::modules::{
    dish,
    user::{self, repository::Role},
};
use sqlx::SqliteConnection;

pub async fn service(conn: &mut SqliteConnection) -> response::Response {
    let users = user::repository::find_many(
        &mut *conn,
        user::repository::Filters {
            role: Some(Role::User),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchOrderFormOptions)?;

    let dishes = dish::repository::find_many(&mut *conn, Default::default())
        .await
        .map_err(|_| response::Error::FailedToFetchOrderFormOptions)?;

    Ok(response::Success::OrderFormOptions { users, dishes })
}
