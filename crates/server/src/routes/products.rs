//! Product collection endpoints under `/api/products`.
//!
//! Write handlers validate the body before touching the store; the API key
//! gate has already run as a route layer by the time they are called.

use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog::{validate_product, CatalogError, ListQuery, ProductId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Body returned by a successful delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Path ids are compared numerically; anything that is not an id of some
/// product is simply not found.
fn parse_id(raw: &str) -> ServerResult<ProductId> {
    raw.trim()
        .parse::<ProductId>()
        .map_err(|_| CatalogError::NotFound.into())
}

/// List products with optional category/search filters and pagination
///
/// Never fails: a query string that cannot be read lists with the defaults.
pub async fn list_products(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(rejection = %rejection.body_text(), "ignoring unreadable query");
            ListQuery::default()
        }
    };
    Json(state.store.query(&query))
}

/// Get a single product by id
pub async fn get_product(
    State(state): State<Arc<ServerState>>,
    id: Result<Path<String>, PathRejection>,
) -> ServerResult<impl IntoResponse> {
    let Path(id) = id?;
    let id = parse_id(&id)?;
    Ok(Json(state.store.get(id)?))
}

/// Aggregate counts over the whole collection
pub async fn product_stats(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.store.stats())
}

/// Create a product
pub async fn create_product(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(body) = payload?;
    let draft = validate_product(&body)?;

    let product = state.store.create(draft);
    tracing::info!(id = product.id, name = %product.name, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Merge the body into an existing product
pub async fn update_product(
    State(state): State<Arc<ServerState>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(body) = payload?;
    let draft = validate_product(&body)?;

    let Path(id) = id?;
    let id = parse_id(&id)?;
    let product = state.store.update(id, draft)?;
    tracing::info!(id, "product updated");

    Ok(Json(product))
}

/// Remove a product
pub async fn delete_product(
    State(state): State<Arc<ServerState>>,
    id: Result<Path<String>, PathRejection>,
) -> ServerResult<impl IntoResponse> {
    let Path(id) = id?;
    let id = parse_id(&id)?;
    state.store.delete(id)?;
    tracing::info!(id, "product deleted");

    Ok(Json(DeleteResponse {
        message: "Product deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServerError;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(matches!(
            parse_id("abc"),
            Err(ServerError::Catalog(CatalogError::NotFound))
        ));
        assert!(matches!(
            parse_id("-1"),
            Err(ServerError::Catalog(CatalogError::NotFound))
        ));
    }
}
