//! Builds parameterized SELECTs from a resource descriptor.

use crate::catalog::Resource;
use serde_json::Value;

/// Quote identifier for PostgreSQL (safe: only from the catalog or validated settings).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// SELECT list: each column as-is, except typed columns cast to text (numeric keeps its precision that way).
fn select_column_list(resource: &Resource) -> String {
    resource
        .columns
        .iter()
        .map(|c| {
            let q = quoted(c.name);
            match c.pg_type {
                Some(_) => format!("{}::text AS {}", q, q),
                None => q,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row of the resource's table, in whatever order the database returns them.
pub fn select_all(resource: &Resource, schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {}",
        select_column_list(resource),
        qualified_table(schema, resource.table)
    );
    q
}

/// SELECT one row by primary key. The key is bound as text and cast to the key's type.
pub fn select_by_pk(resource: &Resource, schema: &str, pk: &Value) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(pk.clone());
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}::{}",
        select_column_list(resource),
        qualified_table(schema, resource.table),
        quoted(resource.primary_key),
        n,
        resource.pk_type.pg_type()
    );
    q
}
