//! List and detail handlers, parameterized by a catalog resource.

use crate::catalog::{PkType, Resource};
use crate::error::AppError;
use crate::extractors::ApiBase;
use crate::serializer::{serialize_detail, serialize_list};
use crate::state::AppState;
use axum::Json;
use serde_json::Value;

/// Parse a path key into the JSON value the repository compares against.
pub fn parse_id(id_str: &str, pk_type: PkType) -> Result<Value, AppError> {
    Ok(match pk_type {
        PkType::Uuid => {
            let u = uuid::Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest("invalid uuid".into()))?;
            Value::String(u.to_string())
        }
        PkType::BigInt => {
            let n: i64 = id_str.parse().map_err(|_| AppError::BadRequest("invalid id".into()))?;
            Value::Number(n.into())
        }
        PkType::Int => {
            let n: i32 = id_str.parse().map_err(|_| AppError::BadRequest("invalid id".into()))?;
            Value::Number(n.into())
        }
        PkType::Text => Value::String(id_str.to_string()),
    })
}

/// `GET /<resource>`: every row in list representation.
pub async fn list(state: AppState, resource: &'static Resource, base: ApiBase) -> Result<Json<Vec<Value>>, AppError> {
    let rows = state.repo.fetch_all(resource).await?;
    tracing::debug!(resource = resource.name, count = rows.len(), "list");
    let body = rows
        .iter()
        .map(|row| serialize_list(&state.catalog, resource, row, &base))
        .collect();
    Ok(Json(body))
}

/// `GET /<resource>/<pk>`: one row in detail representation, or 404 with an empty body.
pub async fn detail(state: AppState, resource: &'static Resource, id_str: String) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id_str, resource.pk_type)?;
    let row = state
        .repo
        .fetch_by_pk(resource, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{}/{}", resource.name, id_str)))?;
    Ok(Json(serialize_detail(resource, &row)))
}
