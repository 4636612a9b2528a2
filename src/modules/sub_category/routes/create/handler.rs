use super::{service::service, types::request};
use crate::utils::{database::Connection, validation::Form};
use axum::response::IntoResponse;

pub async fn handler(mut conn: Connection, Form(body): Form<request::Body>) -> impl IntoResponse {
    service(&mut conn, body).await
}
