use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{branch, category, courier, dish, order, promo_code, sub_category, user};
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to Cooksoo Cafe admin API" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .merge(dish::get_router())
        .merge(category::get_router())
        .merge(sub_category::get_router())
        .merge(courier::get_router())
        .merge(user::get_router())
        .merge(order::get_router())
        .merge(branch::get_router())
        .merge(promo_code::get_router())
}
