//! Route table built at startup from the catalog.

mod common;
mod resource;

pub use common::{common_routes, common_routes_with_ready};
pub use resource::resource_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: health routes at the root, resource routes under `api_prefix` ("" mounts them at the root).
pub fn app(state: AppState, api_prefix: &str) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(resource_routes(state, api_prefix))
        .layer(TraceLayer::new_for_http())
}
