//! Row sources for the catalog's resources.

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

use crate::catalog::Resource;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// One row as a JSON object keyed by column name.
pub type Row = Map<String, Value>;

/// Read access to stored rows. Implementations must not mutate storage.
#[async_trait]
pub trait Repository: Send + Sync {
    /// All rows of the resource, in the repository's default order.
    async fn fetch_all(&self, resource: &Resource) -> Result<Vec<Row>, AppError>;

    /// The row whose primary key equals `pk`, if any.
    async fn fetch_by_pk(&self, resource: &Resource, pk: &Value) -> Result<Option<Row>, AppError>;

    /// Cheap round trip to the backing store, used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}
