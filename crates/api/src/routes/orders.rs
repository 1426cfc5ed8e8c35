//! Order routes.
//!
//! Every order endpoint requires a valid session token. Confirmation email
//! is fired after the insert commits and never fails the request.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use gadgetz_core::{Email, OrderId, OrderStatus};

use crate::db::{self, orders::CancelOutcome};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{NewOrder, Order, StatusUpdate};
use crate::state::AppState;

/// `POST /orders` (auth) - place an order.
///
/// # Errors
///
/// Returns 400 when the quantity is below one, 401 without a valid token,
/// 500 on database failure.
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<NewOrder>,
) -> Result<Json<Order>> {
    if body.quantity < 1 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }

    let order = db::orders::insert(state.pool(), &body).await?;

    tracing::info!(order_id = %order.id, customer = %order.customer_email, "Order placed");

    if let Some(email) = state.email() {
        let email = email.clone();
        let confirmed = order.clone();
        tokio::spawn(async move {
            if let Err(error) = email.send_order_confirmation(&confirmed).await {
                tracing::warn!(
                    order_id = %confirmed.id,
                    error = %error,
                    "Failed to send order confirmation"
                );
            }
        });
    }

    Ok(Json(order))
}

/// `GET /orders` (auth) - every order, newest first.
///
/// # Errors
///
/// Returns 401 without a valid token, 500 on database failure.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>> {
    let orders = db::orders::list_all(state.pool()).await?;
    Ok(Json(orders))
}

/// `GET /orders/{id}` (auth) - order detail.
///
/// # Errors
///
/// Returns 404 when the order does not exist, 401 without a valid token,
/// 500 on database failure.
pub async fn show(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>> {
    let order = db::orders::get(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok(Json(order))
}

/// `DELETE /orders/{id}` (auth) - cancel an order unless delivered.
///
/// # Errors
///
/// Returns 404 when the order does not exist, 409 when it has already been
/// delivered, 401 without a valid token, 500 on database failure.
pub async fn cancel(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Value>> {
    match db::orders::cancel(state.pool(), id).await? {
        CancelOutcome::Cancelled => {
            tracing::info!(order_id = %id, "Order cancelled");
            Ok(Json(json!({ "message": "Order cancelled" })))
        }
        CancelOutcome::NotFound => Err(AppError::NotFound("Order not found".to_string())),
        CancelOutcome::AlreadyDelivered => Err(AppError::Conflict(
            "Delivered orders cannot be cancelled".to_string(),
        )),
    }
}

/// `PATCH /update-order-status/{id}` (auth) - set an order's status.
///
/// # Errors
///
/// Returns 404 when the order does not exist, 400 for an unknown status,
/// 401 without a valid token, 500 on database failure.
pub async fn update_status(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Order>> {
    let status: OrderStatus = body
        .status
        .parse()
        .map_err(|e: gadgetz_core::ParseStatusError| AppError::BadRequest(e.to_string()))?;

    let order = db::orders::update_status(state.pool(), id, status)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    tracing::info!(order_id = %id, status = %order.status, "Order status updated");
    Ok(Json(order))
}

/// `GET /customer-orders/{email}` (auth) - one customer's orders.
///
/// # Errors
///
/// Returns 400 for an unparseable email, 401 without a valid token,
/// 500 on database failure.
pub async fn customer_orders(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Order>>> {
    let email = Email::parse(&email)?;
    let orders = db::orders::list_for_customer(state.pool(), &email).await?;

    Ok(Json(orders))
}
