use super::{
    service::service,
    types::{request, response},
};
use crate::utils::database::Connection;
use axum::extract::Query;

pub async fn handler(
    mut conn: Connection,
    Query(filters): Query<request::Filters>,
) -> response::Response {
    service(&mut conn, filters).await
}
