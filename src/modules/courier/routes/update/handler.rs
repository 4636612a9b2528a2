use super::{service::service, types::request};
use crate::utils::{database::Connection, validation::Form};
use axum::{extract::Path, response::IntoResponse};

pub async fn handler(
    mut conn: Connection,
    Path(id): Path<i64>,
    Form(body): Form<request::Body>,
) -> impl IntoResponse {
    service(&mut conn, request::Payload { id, body }).await
}
