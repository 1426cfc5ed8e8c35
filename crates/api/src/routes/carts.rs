//! Cart routes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use gadgetz_core::{CartItemId, Email};

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{CartItem, NewCartItem, QuantityUpdate};
use crate::state::AppState;

/// Query parameters for `GET /carts`.
#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}

/// `POST /carts` - add a line to a user's cart.
///
/// # Errors
///
/// Returns 400 when the quantity is below one, 500 on database failure.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<NewCartItem>,
) -> Result<Json<CartItem>> {
    if body.quantity < 1 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }

    let item = db::carts::insert(state.pool(), &body).await?;
    Ok(Json(item))
}

/// `GET /carts?email=` - list a user's cart lines.
///
/// # Errors
///
/// Returns 400 when the email query is missing or unparseable, 500 on
/// database failure.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<Vec<CartItem>>> {
    let email = query
        .email
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Email query is required".to_string()))?;
    let email = Email::parse(email)?;

    let items = db::carts::list_for_user(state.pool(), &email).await?;
    Ok(Json(items))
}

/// `PATCH /carts/{id}` - set a cart line's quantity.
///
/// # Errors
///
/// Returns 400 when the quantity is below one, 404 when the line does not
/// exist, 500 on database failure.
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
    Json(body): Json<QuantityUpdate>,
) -> Result<Json<CartItem>> {
    if body.quantity < 1 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }

    let item = db::carts::update_quantity(state.pool(), id, body.quantity)
        .await?
        .ok_or_else(|| AppError::NotFound("Cart item not found".to_string()))?;

    Ok(Json(item))
}

/// `DELETE /carts/{id}` - remove a cart line.
///
/// # Errors
///
/// Returns 404 when the line does not exist, 500 on database failure.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
) -> Result<Json<Value>> {
    let deleted = db::carts::delete(state.pool(), id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Cart item not found".to_string()));
    }

    Ok(Json(json!({ "deletedCount": deleted, "message": "Cart item removed" })))
}
