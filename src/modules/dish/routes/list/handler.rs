use super::{
    service::service,
    types::{request, response},
};
use crate::utils::{database::Connection, validation::Form};
use axum::extract::Query;

pub async fn query_handler(
    mut conn: Connection,
    Query(filters): Query<request::Filters>,
) -> response::Response {
    service(&mut conn, filters).await
}

// the menu page filters by posting its category picker
pub async fn form_handler(
    mut conn: Connection,
    Form(filters): Form<request::Filters>,
) -> response::Response {
    service(&mut conn, filters).await
}
