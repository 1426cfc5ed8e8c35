//! Wishlist routes.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use gadgetz_core::Email;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{NewWishlistItem, WishlistItem, WishlistRemoval};
use crate::state::AppState;

/// Query parameters for `GET /wishlist`.
#[derive(Debug, Deserialize)]
pub struct WishlistQuery {
    pub email: Option<String>,
}

/// `POST /wishlist` - save a product snapshot to a user's wishlist.
///
/// # Errors
///
/// Returns 500 on database failure.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<NewWishlistItem>,
) -> Result<Json<WishlistItem>> {
    let item = db::wishlist::insert(state.pool(), &body).await?;
    Ok(Json(item))
}

/// `GET /wishlist?email=` - list a user's wishlist.
///
/// # Errors
///
/// Returns 400 when the email query is missing or unparseable, 500 on
/// database failure.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WishlistQuery>,
) -> Result<Json<Vec<WishlistItem>>> {
    let email = query
        .email
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Email query is required".to_string()))?;
    let email = Email::parse(email)?;

    let items = db::wishlist::list_for_user(state.pool(), &email).await?;
    Ok(Json(items))
}

/// `DELETE /wishlist` - remove by `{productId, email}` in the body.
///
/// # Errors
///
/// Returns 400 when either field is missing, 404 when no row matched,
/// 500 on database failure.
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<WishlistRemoval>,
) -> Result<Json<Value>> {
    let (Some(product_id), Some(email)) = (body.product_id, body.email) else {
        return Err(AppError::BadRequest(
            "Product ID and email are required".to_string(),
        ));
    };

    let deleted = db::wishlist::delete(state.pool(), product_id, &email).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Wishlist item not found".to_string()));
    }

    Ok(Json(json!({ "message": "Wishlist item removed" })))
}
