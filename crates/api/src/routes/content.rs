//! Banner and marquee routes.
//!
//! Reads are public so the storefront can render without a session; writes
//! require a token.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use gadgetz_core::{BannerId, MarqueeItemId};

use crate::db;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Banner, MarqueeItem, NewBanner, NewMarqueeItem};
use crate::state::AppState;

/// `GET /banners` - all banners, newest first.
///
/// # Errors
///
/// Returns 500 on database failure.
pub async fn list_banners(State(state): State<AppState>) -> Result<Json<Vec<Banner>>> {
    let banners = db::content::list_banners(state.pool()).await?;
    Ok(Json(banners))
}

/// `POST /banners` (auth) - add a banner.
///
/// # Errors
///
/// Returns 401 without a valid token, 500 on database failure.
pub async fn create_banner(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<NewBanner>,
) -> Result<Json<Banner>> {
    let banner = db::content::insert_banner(state.pool(), &body).await?;
    Ok(Json(banner))
}

/// `DELETE /banners/{id}` (auth) - remove a banner.
///
/// # Errors
///
/// Returns 404 when the banner does not exist, 401 without a valid token,
/// 500 on database failure.
pub async fn remove_banner(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<BannerId>,
) -> Result<Json<Value>> {
    let deleted = db::content::delete_banner(state.pool(), id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Banner not found".to_string()));
    }

    Ok(Json(json!({ "deletedCount": deleted, "message": "Banner removed" })))
}

/// `GET /marquee` - all marquee entries in display order.
///
/// # Errors
///
/// Returns 500 on database failure.
pub async fn list_marquee(State(state): State<AppState>) -> Result<Json<Vec<MarqueeItem>>> {
    let items = db::content::list_marquee(state.pool()).await?;
    Ok(Json(items))
}

/// `POST /marquee` (auth) - add a marquee entry.
///
/// # Errors
///
/// Returns 401 without a valid token, 500 on database failure.
pub async fn create_marquee(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<NewMarqueeItem>,
) -> Result<Json<MarqueeItem>> {
    let item = db::content::insert_marquee(state.pool(), &body).await?;
    Ok(Json(item))
}

/// `DELETE /marquee/{id}` (auth) - remove a marquee entry.
///
/// # Errors
///
/// Returns 404 when the entry does not exist, 401 without a valid token,
/// 500 on database failure.
pub async fn remove_marquee(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<MarqueeItemId>,
) -> Result<Json<Value>> {
    let deleted = db::content::delete_marquee(state.pool(), id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Marquee item not found".to_string()));
    }

    Ok(Json(json!({ "deletedCount": deleted, "message": "Marquee item removed" })))
}
