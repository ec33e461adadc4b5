use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use db::models::product::{Product, ProductPayload};

use super::params::{ListParams, parse_row_id};
use crate::{
    Deployment,
    error::ApiError,
    response::{CreatedResponse, MessageResponse},
};

fn not_found() -> ApiError {
    ApiError::NotFound("Product not found".to_string())
}

/// GET /api/products - List products, newest first, optionally limited
pub async fn get_products(
    State(deployment): State<Deployment>,
    Query(params): Query<ListParams>,
) -> Result<ResponseJson<Vec<Product>>, ApiError> {
    let products = Product::find_all(&deployment.db().pool, params.row_limit())
        .await
        .map_err(ApiError::store("fetch products"))?;
    Ok(ResponseJson(products))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(deployment): State<Deployment>,
    Path(id): Path<String>,
) -> Result<ResponseJson<Product>, ApiError> {
    let id = parse_row_id(&id).ok_or_else(not_found)?;
    Product::find_by_id(&deployment.db().pool, id)
        .await
        .map_err(ApiError::store("fetch product"))?
        .map(ResponseJson)
        .ok_or_else(not_found)
}

/// POST /api/products
pub async fn create_product(
    State(deployment): State<Deployment>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<CreatedResponse>), ApiError> {
    let Json(payload) = payload.map_err(ApiError::payload("create product"))?;
    let id = Product::create(&deployment.db().pool, &payload)
        .await
        .map_err(ApiError::store("create product"))?;
    Ok((
        StatusCode::CREATED,
        ResponseJson(CreatedResponse {
            id,
            message: "Product created",
        }),
    ))
}

/// PUT /api/products/{id} - Replace a product. An unknown id is a silent no-op.
pub async fn update_product(
    State(deployment): State<Deployment>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::payload("update product"))?;
    if let Some(id) = parse_row_id(&id) {
        let changed = Product::update(&deployment.db().pool, id, &payload)
            .await
            .map_err(ApiError::store("update product"))?;
        if changed == 0 {
            tracing::debug!(id, "Product update matched no row");
        }
    }
    Ok(ResponseJson(MessageResponse::new("Product updated")))
}

/// DELETE /api/products/{id} - An unknown id is a silent no-op.
pub async fn delete_product(
    State(deployment): State<Deployment>,
    Path(id): Path<String>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    if let Some(id) = parse_row_id(&id) {
        Product::delete(&deployment.db().pool, id)
            .await
            .map_err(ApiError::store("delete product"))?;
    }
    Ok(ResponseJson(MessageResponse::new("Product deleted")))
}

pub fn router() -> Router<Deployment> {
    Router::new()
        .route("/products", get(get_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
