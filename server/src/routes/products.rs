//! Catalog proxy routes used by the hydrated client.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use products::{CatalogError, LISTING_LIMIT, Product};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

type ApiError = (StatusCode, Json<Value>);

pub(crate) fn catalog_error_to_status(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Fetch { .. } | CatalogError::Parse(_) | CatalogError::Transport(_) => StatusCode::BAD_GATEWAY,
        CatalogError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn api_error(err: CatalogError) -> ApiError {
    (catalog_error_to_status(&err), Json(json!({ "error": err.to_string(), "code": err.error_code() })))
}

/// `GET /api/products?limit=n` — validated product listing (default limit 5).
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let limit = query.limit.unwrap_or(LISTING_LIMIT);
    state
        .catalog
        .list_products(limit)
        .await
        .map(Json)
        .map_err(api_error)
}

/// `GET /api/products/:id` — single product; the segment is forwarded as-is.
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>, ApiError> {
    state
        .catalog
        .get_product(&id)
        .await
        .map(Json)
        .map_err(api_error)
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
