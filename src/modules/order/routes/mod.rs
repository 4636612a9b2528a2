mod create;
mod form_options;
mod get;
mod list;
mod send_to_kitchen;
mod update_status;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(form_options::get_router())
        .merge(send_to_kitchen::get_router())
        .merge(update_status::get_router())
        .merge(list::get_router())
        .merge(get::get_router())
}
