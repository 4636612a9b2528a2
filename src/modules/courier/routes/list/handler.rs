use super::{service::service, types::response};
use crate::utils::database::Connection;

pub async fn handler(mut conn: Connection) -> response::Response {
    service(&mut conn).await
}
