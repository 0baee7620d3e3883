//! Process settings from environment variables (a `.env` file is honored by the binary).

use crate::catalog::is_identifier;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SCHEMA: &str = "eba_portfolio";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PUBLIC_HOST: &str = "localhost:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Where rows come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres { url: String, max_connections: u32 },
    Fixture(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub backend: Backend,
    /// Database schema holding the EBA tables.
    pub schema: String,
    pub bind_addr: SocketAddr,
    /// Path the API is nested under: empty, or "/segment[/segment...]" without trailing slash.
    pub api_prefix: String,
    /// Authority used for hyperlinks when a request carries no Host header.
    pub public_host: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. `DATABASE_URL` wins over `NPL_FIXTURE_PATH`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let max_connections = match get("NPL_DB_MAX_CONNECTIONS") {
            Some(v) => v.parse::<u32>().ok().filter(|n| *n > 0).ok_or(ConfigError::Invalid {
                var: "NPL_DB_MAX_CONNECTIONS",
                value: v,
                reason: "expected a positive integer".into(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let backend = match (get("DATABASE_URL"), get("NPL_FIXTURE_PATH")) {
            (Some(url), _) => Backend::Postgres { url, max_connections },
            (None, Some(path)) => Backend::Fixture(PathBuf::from(path)),
            (None, None) => return Err(ConfigError::MissingBackend),
        };

        let schema = get("NPL_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_identifier(&schema) {
            return Err(ConfigError::Invalid {
                var: "NPL_SCHEMA",
                value: schema,
                reason: "expected a lowercase SQL identifier".into(),
            });
        }

        let bind = get("NPL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            var: "NPL_BIND_ADDR",
            value: bind.clone(),
            reason: e.to_string(),
        })?;

        let api_prefix = normalize_prefix(get("NPL_API_PREFIX").as_deref().unwrap_or(""));
        let public_host = get("NPL_PUBLIC_HOST").unwrap_or_else(|| DEFAULT_PUBLIC_HOST.into());

        Ok(Settings {
            backend,
            schema,
            bind_addr,
            api_prefix,
            public_host,
        })
    }
}

/// "api/v1/" -> "/api/v1", "/" -> "".
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
