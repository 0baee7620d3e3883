//! In-memory repository, seeded programmatically or from a JSON fixture.
//!
//! Fixture format: `{ "<resource name>": [ { "<column>": value, ... }, ... ], ... }`.
//! Rows are served in insertion order.

use super::{Repository, Row};
use crate::catalog::{Catalog, PkType, Resource};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    rows: HashMap<String, Vec<Row>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows for the resource named `resource`.
    pub fn with_rows(mut self, resource: &str, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.entry(resource.to_string()).or_default().extend(rows);
        self
    }

    /// Parse a fixture document. Every key must name a catalog resource, every row must be an
    /// object, and every row needs a non-null primary key that is unique within its resource.
    pub fn from_fixture(json: &str, catalog: &Catalog) -> Result<Self, AppError> {
        let doc: Value = serde_json::from_str(json).map_err(|e| AppError::Fixture(e.to_string()))?;
        let Value::Object(doc) = doc else {
            return Err(AppError::Fixture("top level must be a JSON object".into()));
        };
        let mut repo = Self::new();
        for (name, rows) in doc {
            let Some(resource) = catalog.resource(&name) else {
                return Err(AppError::Fixture(format!("unknown resource '{}'", name)));
            };
            let Value::Array(rows) = rows else {
                return Err(AppError::Fixture(format!("'{}' must be an array of rows", name)));
            };
            let mut out = Vec::with_capacity(rows.len());
            let mut seen = HashSet::with_capacity(rows.len());
            for (i, row) in rows.into_iter().enumerate() {
                let Value::Object(m) = row else {
                    return Err(AppError::Fixture(format!("'{}' rows must be objects", name)));
                };
                let key = m
                    .get(resource.primary_key)
                    .and_then(|v| canonical_key(resource.pk_type, v));
                let Some(key) = key else {
                    return Err(AppError::Fixture(format!(
                        "'{}' row {} has no usable '{}'",
                        name, i, resource.primary_key
                    )));
                };
                if !seen.insert(key) {
                    return Err(AppError::Fixture(format!(
                        "'{}' row {} repeats {} {}",
                        name, i, resource.primary_key, m[resource.primary_key]
                    )));
                }
                out.push(m);
            }
            repo = repo.with_rows(&name, out);
        }
        Ok(repo)
    }

    pub async fn load(path: impl AsRef<Path>, catalog: &Catalog) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Fixture(format!("{}: {}", path.display(), e)))?;
        Self::from_fixture(&json, catalog)
    }
}

/// Comparable form of a stored key, matching what `same_key` treats as equal. None for null or empty keys.
fn canonical_key(pk_type: PkType, v: &Value) -> Option<String> {
    match (pk_type, v) {
        (_, Value::Number(n)) => Some(n.to_string()),
        (_, Value::String(s)) if s.is_empty() => None,
        (PkType::Uuid, Value::String(s)) => Some(
            uuid::Uuid::parse_str(s)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| s.clone()),
        ),
        (PkType::BigInt | PkType::Int, Value::String(s)) => {
            Some(s.parse::<i64>().map(|n| n.to_string()).unwrap_or_else(|_| s.clone()))
        }
        (_, Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Key equality, tolerating UUID case differences and integer keys stored as strings.
fn same_key(pk_type: PkType, stored: &Value, pk: &Value) -> bool {
    if stored == pk {
        return true;
    }
    match (pk_type, stored, pk) {
        (PkType::Uuid, Value::String(a), Value::String(b)) => {
            matches!((uuid::Uuid::parse_str(a), uuid::Uuid::parse_str(b)), (Ok(x), Ok(y)) if x == y)
        }
        (PkType::BigInt | PkType::Int, Value::String(a), Value::Number(b)) => {
            a.parse::<i64>().ok().is_some_and(|a| Some(a) == b.as_i64())
        }
        _ => false,
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn fetch_all(&self, resource: &Resource) -> Result<Vec<Row>, AppError> {
        Ok(self.rows.get(resource.name).cloned().unwrap_or_default())
    }

    async fn fetch_by_pk(&self, resource: &Resource, pk: &Value) -> Result<Option<Row>, AppError> {
        let found = self.rows.get(resource.name).and_then(|rows| {
            rows.iter().find(|row| {
                row.get(resource.primary_key)
                    .is_some_and(|stored| same_key(resource.pk_type, stored, pk))
            })
        });
        Ok(found.cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
