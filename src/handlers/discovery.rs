//! Root discovery: names every list endpoint with its absolute URL.

use crate::extractors::ApiBase;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::{Map, Value};

pub const DISCOVERY_KEY: &str = "EBA Template Endpoints";

/// `GET /` and `GET /eba/`.
pub async fn api_root(State(state): State<AppState>, base: ApiBase) -> Json<Value> {
    let endpoints: Vec<Value> = state
        .catalog
        .resources()
        .iter()
        .map(|r| {
            let mut entry = Map::new();
            entry.insert(r.name.to_string(), Value::String(base.url(&format!("/{}", r.name))));
            Value::Object(entry)
        })
        .collect();
    let mut body = Map::new();
    body.insert(DISCOVERY_KEY.to_string(), Value::Array(endpoints));
    Json(Value::Object(body))
}
