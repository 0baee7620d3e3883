//! Wire representations of rows: a narrow, hyperlinked list view and a full detail view.

use crate::catalog::{Catalog, Resource};
use crate::extractors::ApiBase;
use crate::repository::Row;
use serde_json::{Map, Value};

/// Percent-encoded path segment for a key value; None for null or composite values.
fn key_segment(v: &Value) -> Option<String> {
    match v {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(urlencoding::encode(s).into_owned()),
        _ => None,
    }
}

fn project(row: &Row, columns: impl Iterator<Item = &'static str>) -> Map<String, Value> {
    columns
        .map(|c| (c.to_string(), row.get(c).cloned().unwrap_or(Value::Null)))
        .collect()
}

/// List view: `list_columns`, then `url` (own detail link) and one link per relation whose target has a detail endpoint.
pub fn serialize_list(catalog: &Catalog, resource: &Resource, row: &Row, base: &ApiBase) -> Value {
    let mut out = project(row, resource.list_columns.iter().copied());
    if resource.detail {
        if let Some(pk) = row.get(resource.primary_key).and_then(key_segment) {
            out.insert("url".into(), Value::String(base.url(&format!("/{}/{}", resource.name, pk))));
        }
    }
    for rel in resource.relations {
        let Some(target) = catalog.resource(rel.target).filter(|t| t.detail) else {
            continue;
        };
        let link = row
            .get(rel.column)
            .and_then(key_segment)
            .map(|fk| Value::String(base.url(&format!("/{}/{}", target.name, fk))))
            .unwrap_or(Value::Null);
        out.insert(rel.name.into(), link);
    }
    Value::Object(out)
}

/// Detail view: every catalog column, no hyperlinks.
pub fn serialize_detail(resource: &Resource, row: &Row) -> Value {
    Value::Object(project(row, resource.column_names()))
}
