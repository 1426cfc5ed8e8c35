//! Product catalog routes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use gadgetz_core::{Email, ProductId};

use crate::db;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::state::AppState;

/// Query parameters for `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub seller: Option<String>,
}

/// `POST /products` (auth) - add a product.
///
/// # Errors
///
/// Returns 401 without a valid token, 500 on database failure.
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> Result<Json<Product>> {
    let product = db::products::insert(state.pool(), &body).await?;

    tracing::info!(product_id = %product.id, seller = %product.seller_email, "Product added");
    Ok(Json(product))
}

/// `GET /products` - list products, optionally filtered.
///
/// # Errors
///
/// Returns 400 for an unparseable seller email, 500 on database failure.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>> {
    let seller = filter
        .seller
        .as_deref()
        .map(Email::parse)
        .transpose()?;

    let products =
        db::products::list(state.pool(), filter.category.as_deref(), seller.as_ref()).await?;
    Ok(Json(products))
}

/// `GET /product/{id}` - product detail.
///
/// # Errors
///
/// Returns 404 when the product does not exist, 500 on database failure.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = db::products::get(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// `PATCH /product/{id}` (auth) - partial update.
///
/// # Errors
///
/// Returns 400 for an empty patch, 404 when the product does not exist,
/// 401 without a valid token, 500 on database failure.
pub async fn update(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    if patch.is_empty() {
        return Err(AppError::BadRequest(
            "No updatable fields supplied".to_string(),
        ));
    }

    let product = db::products::update(state.pool(), id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// `DELETE /product/{id}` (auth) - remove a product.
///
/// # Errors
///
/// Returns 404 when the product does not exist, 401 without a valid token,
/// 500 on database failure.
pub async fn remove(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Value>> {
    let deleted = db::products::delete(state.pool(), id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    Ok(Json(json!({ "deletedCount": deleted, "message": "Product removed" })))
}
