mod create;
mod delete;
mod list;
mod qr;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(list::get_router())
        .merge(qr::get_router())
        .merge(delete::get_router())
}
