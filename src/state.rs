//! Shared application state for all routes. Immutable after startup.

use crate::catalog::Catalog;
use crate::repository::Repository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub repo: Arc<dyn Repository>,
    /// Authority for absolute URLs when the request has no Host header.
    pub public_host: Arc<str>,
}

impl AppState {
    pub fn new(catalog: Catalog, repo: impl Repository + 'static, public_host: impl Into<Arc<str>>) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            repo: Arc::new(repo),
            public_host: public_host.into(),
        }
    }
}
