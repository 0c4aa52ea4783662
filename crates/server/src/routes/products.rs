use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::{StatusCode, Uri},
    Json,
};
use models::{Product, ProductDetails, ProductId};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = crate::openapi::ProductDetailsDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductIdDoc),
        (status = 400, description = "Validation failed", body = crate::openapi::ErrorResponseBodyDoc)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    uri: Uri,
    payload: Result<Json<ProductDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductId>), ApiError> {
    let Json(details) = payload.map_err(|rej| ApiError::bad_request(rej.body_text(), uri.path()))?;
    let id = state
        .products
        .create(&details)
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// List products, optionally filtered by type
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(("type" = Option<String>, Query, description = "book | food | gadget | other, any case")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::ProductDoc]),
        (status = 400, description = "Unknown product type", body = crate::openapi::ErrorResponseBodyDoc)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    uri: Uri,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(q) = query.map_err(|rej| ApiError::bad_request(rej.body_text(), uri.path()))?;
    let items = state
        .products
        .list(q.product_type.as_deref())
        .await
        .map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(Json(items))
}
