use super::{service::service, types::request};
use crate::utils::database::Connection;
use axum::{extract::Path, response::IntoResponse};

pub async fn handler(mut conn: Connection, Path(id): Path<i64>) -> impl IntoResponse {
    service(&mut conn, request::Payload { id }).await
}
