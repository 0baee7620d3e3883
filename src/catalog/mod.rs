//! Resource catalog: validated descriptors for every exposed EBA entity, looked up by path segment.

pub mod eba;
mod types;
mod validator;

pub use types::*;
pub use validator::{is_identifier, validate};

use crate::error::CatalogError;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct Catalog {
    resources: Vec<&'static Resource>,
    by_name: HashMap<&'static str, &'static Resource>,
}

impl Catalog {
    /// Validate and index `resources`. Order is kept for discovery and routing.
    pub fn new(resources: &[&'static Resource]) -> Result<Self, CatalogError> {
        validate(resources)?;
        let by_name = resources.iter().map(|r| (r.name, *r)).collect();
        Ok(Catalog {
            resources: resources.to_vec(),
            by_name,
        })
    }

    /// The eight EBA NPL template resources.
    pub fn eba() -> Result<Self, CatalogError> {
        Self::new(eba::RESOURCES)
    }

    pub fn resources(&self) -> &[&'static Resource] {
        &self.resources
    }

    pub fn resource(&self, name: &str) -> Option<&'static Resource> {
        self.by_name.get(name).copied()
    }
}
