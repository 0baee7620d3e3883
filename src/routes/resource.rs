//! Discovery plus one list route per resource, and a detail route where the resource has one.

use crate::extractors::{ApiBase, MountPrefix};
use crate::handlers::{api_root, detail, list};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Router,
};

/// Resource routes under `prefix` ("" for the root). With a prefix, both `{prefix}` and `{prefix}/` serve discovery.
pub fn resource_routes(state: AppState, prefix: &str) -> Router {
    let mut router = if prefix.is_empty() {
        Router::new().route("/", get(api_root))
    } else {
        Router::new()
            .route(prefix, get(api_root))
            .route(&format!("{}/", prefix), get(api_root))
    };
    router = router.route(&format!("{}/eba/", prefix), get(api_root));

    let resources = state.catalog.resources().to_vec();
    for resource in resources {
        router = router.route(
            &format!("{}/{}", prefix, resource.name),
            get(move |State(state): State<AppState>, base: ApiBase| list(state, resource, base)),
        );
        if resource.detail {
            router = router.route(
                &format!("{}/{}/:id", prefix, resource.name),
                get(move |State(state): State<AppState>, Path(id): Path<String>| detail(state, resource, id)),
            );
        }
    }

    if !prefix.is_empty() {
        router = router.layer(Extension(MountPrefix(prefix.into())));
    }
    router.with_state(state)
}
