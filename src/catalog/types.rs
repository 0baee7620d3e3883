//! Resource descriptors: one per EBA template entity exposed over HTTP.

/// Primary key type for parsing path ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PkType {
    Uuid,
    BigInt,
    Int,
    Text,
}

impl PkType {
    /// PostgreSQL type the bound key is cast to.
    pub fn pg_type(self) -> &'static str {
        match self {
            PkType::Uuid => "uuid",
            PkType::BigInt => "bigint",
            PkType::Int => "integer",
            PkType::Text => "text",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    /// PostgreSQL type name when the column needs a cast on select (e.g. "numeric" is read as text).
    pub pg_type: Option<&'static str>,
}

impl Column {
    pub const fn plain(name: &'static str) -> Self {
        Column { name, pg_type: None }
    }

    pub const fn typed(name: &'static str, pg_type: &'static str) -> Self {
        Column {
            name,
            pg_type: Some(pg_type),
        }
    }
}

/// Foreign key to another resource. Rendered as a hyperlink in list views when the target has a detail endpoint.
#[derive(Clone, Copy, Debug)]
pub struct Relation {
    /// Field name of the hyperlink in list representations.
    pub name: &'static str,
    /// Our column holding the target's primary key.
    pub column: &'static str,
    /// Name (path segment) of the target resource.
    pub target: &'static str,
}

#[derive(Debug)]
pub struct Resource {
    /// Path segment and discovery name, e.g. "eba_loan".
    pub name: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
    pub pk_type: PkType,
    /// Columns of the detail representation; also everything the repository selects.
    pub columns: &'static [Column],
    /// Columns of the list representation.
    pub list_columns: &'static [&'static str],
    pub relations: &'static [Relation],
    /// Whether `GET /<name>/<pk>` is served.
    pub detail: bool,
}

impl Resource {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
}
