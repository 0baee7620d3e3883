//! Absolute URL base of the current request (scheme, authority, mount prefix).

use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{request::Parts, HeaderMap},
};
use std::sync::Arc;

pub const FORWARDED_PROTO_HEADER: &str = "X-Forwarded-Proto";
pub const FORWARDED_HOST_HEADER: &str = "X-Forwarded-Host";

/// `scheme://authority/prefix` the client used to reach this API. Builds links that resolve from the client's side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase {
    pub origin: String,
    pub prefix: String,
}

impl ApiBase {
    /// Absolute URL for an API path such as "/eba_loan".
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.origin, self.prefix, path)
    }
}

/// Path prefix the resource routes were registered under. Set as a request extension; wins over URI derivation.
#[derive(Clone, Debug)]
pub struct MountPrefix(pub Arc<str>);

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        // Proxy chains append; the first entry is the client-facing one.
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Path under which the router that sees `inner` was nested, given the full request path.
fn mount_prefix(original: &str, inner: &str) -> String {
    if let Some(p) = original.strip_suffix(inner) {
        return p.trim_end_matches('/').to_string();
    }
    // a nested root: "/api" reaches the inner router as "/"
    if inner == "/" {
        return original.trim_end_matches('/').to_string();
    }
    String::new()
}

#[async_trait]
impl FromRequestParts<AppState> for ApiBase {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let scheme = header(&parts.headers, FORWARDED_PROTO_HEADER).unwrap_or("http");
        let host = header(&parts.headers, FORWARDED_HOST_HEADER)
            .or_else(|| header(&parts.headers, axum::http::header::HOST.as_str()))
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or(&*state.public_host);
        let prefix = if let Some(MountPrefix(prefix)) = parts.extensions.get::<MountPrefix>() {
            prefix.to_string()
        } else if let Some(OriginalUri(original)) = parts.extensions.get::<OriginalUri>() {
            mount_prefix(original.path(), parts.uri.path())
        } else {
            String::new()
        };
        Ok(ApiBase {
            origin: format!("{}://{}", scheme, host),
            prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::repository::MemoryRepository;
    use axum::http::Request;

    fn state() -> AppState {
        AppState::new(Catalog::eba().unwrap(), MemoryRepository::new(), "fallback:8000")
    }

    async fn extract(req: Request<()>) -> ApiBase {
        let (mut parts, _) = req.into_parts();
        ApiBase::from_request_parts(&mut parts, &state()).await.unwrap()
    }

    #[test]
    fn mount_prefix_cases() {
        assert_eq!(mount_prefix("/eba/", "/eba/"), "");
        assert_eq!(mount_prefix("/api/eba/", "/eba/"), "/api");
        assert_eq!(mount_prefix("/api/v1/eba_loan", "/eba_loan"), "/api/v1");
        assert_eq!(mount_prefix("/api", "/"), "/api");
        assert_eq!(mount_prefix("/api/", "/"), "/api");
        assert_eq!(mount_prefix("/", "/"), "");
    }

    #[tokio::test]
    async fn uses_host_header() {
        let req = Request::get("/").header("host", "npl.example:8080").body(()).unwrap();
        let base = extract(req).await;
        assert_eq!(base.url("/eba_loan"), "http://npl.example:8080/eba_loan");
    }

    #[tokio::test]
    async fn forwarded_headers_take_precedence() {
        let req = Request::get("/")
            .header("host", "internal:3000")
            .header("x-forwarded-proto", "https")
            .header("x-forwarded-host", "api.example.com, proxy.local")
            .body(())
            .unwrap();
        let base = extract(req).await;
        assert_eq!(base.origin, "https://api.example.com");
    }

    #[tokio::test]
    async fn falls_back_to_public_host() {
        let req = Request::get("/").body(()).unwrap();
        let base = extract(req).await;
        assert_eq!(base.origin, "http://fallback:8000");
        assert_eq!(base.prefix, "");
    }

    #[tokio::test]
    async fn mount_prefix_extension_wins() {
        let mut req = Request::get("/api/v1/").header("host", "npl.test").body(()).unwrap();
        req.extensions_mut().insert(MountPrefix("/api/v1".into()));
        let base = extract(req).await;
        assert_eq!(base.url("/eba_loan"), "http://npl.test/api/v1/eba_loan");
    }
}
