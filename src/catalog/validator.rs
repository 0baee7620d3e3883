//! Catalog validation: identifiers, key coverage, and relation integrity.

use crate::catalog::Resource;
use crate::error::CatalogError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("identifier pattern compiles"))
}

/// True when `s` can be used unquoted as a table, column, schema, or path segment.
pub fn is_identifier(s: &str) -> bool {
    identifier_re().is_match(s)
}

fn check_identifier(resource: &Resource, s: &str) -> Result<(), CatalogError> {
    if is_identifier(s) {
        Ok(())
    } else {
        Err(CatalogError::InvalidIdentifier {
            resource: resource.name.to_string(),
            identifier: s.to_string(),
        })
    }
}

pub fn validate(resources: &[&Resource]) -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    for r in resources {
        if !names.insert(r.name) {
            return Err(CatalogError::DuplicatePathSegment(r.name.to_string()));
        }
    }

    for r in resources {
        check_identifier(r, r.name)?;
        check_identifier(r, r.table)?;
        let columns: HashSet<&str> = r.column_names().collect();
        if columns.len() != r.columns.len() {
            return Err(CatalogError::Validation(format!("{}: duplicate column", r.name)));
        }
        for col in r.columns {
            check_identifier(r, col.name)?;
            if let Some(t) = col.pg_type {
                check_identifier(r, t)?;
            }
        }

        if !columns.contains(r.primary_key) || !r.list_columns.contains(&r.primary_key) {
            return Err(CatalogError::InvalidPrimaryKey {
                resource: r.name.to_string(),
                column: r.primary_key.to_string(),
            });
        }
        if let Some(missing) = r.list_columns.iter().find(|c| !columns.contains(*c)) {
            return Err(CatalogError::MissingReference {
                kind: "column",
                id: format!("{}.{}", r.name, missing),
            });
        }
        if r.detail && r.list_columns.len() >= r.columns.len() {
            return Err(CatalogError::Validation(format!(
                "{}: detail view must expose more columns than the list view",
                r.name
            )));
        }

        for rel in r.relations {
            if !columns.contains(rel.column) {
                return Err(CatalogError::MissingReference {
                    kind: "column",
                    id: format!("{}.{}", r.name, rel.column),
                });
            }
            if !names.contains(rel.target) {
                return Err(CatalogError::MissingReference {
                    kind: "resource",
                    id: rel.target.to_string(),
                });
            }
            if columns.contains(rel.name) || rel.name == "url" {
                return Err(CatalogError::Validation(format!(
                    "{}: relation '{}' shadows a field",
                    r.name, rel.name
                )));
            }
        }
    }

    Ok(())
}
