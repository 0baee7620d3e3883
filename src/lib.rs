//! EBA NPL API: read-only REST access to EBA NPL template portfolio data.

pub mod catalog;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod serializer;
pub mod settings;
pub mod sql;
pub mod state;

pub use catalog::{Catalog, Resource};
pub use error::{AppError, CatalogError, ConfigError};
pub use repository::{MemoryRepository, PgRepository, Repository, Row};
pub use routes::{app, common_routes, common_routes_with_ready, resource_routes};
pub use settings::{Backend, Settings};
pub use state::AppState;
