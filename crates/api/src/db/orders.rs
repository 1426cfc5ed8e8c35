//! Order repository.

use chrono::Utc;
use sqlx::PgPool;

use gadgetz_core::{Email, OrderId, OrderStatus};

use super::RepositoryError;
use crate::models::{NewOrder, Order};

const ORDER_COLUMNS: &str = "id, customer_email, customer_name, product_id, product_name, \
                             quantity, total_price, status, payment_method, transaction_id, \
                             order_date, created_at";

/// Outcome of a cancellation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The order was moved to `cancelled`.
    Cancelled,
    /// No order with that id exists.
    NotFound,
    /// The order is already delivered and can no longer be cancelled.
    AlreadyDelivered,
}

/// Insert a new order.
///
/// Status starts at `pending` and `order_date` is stamped with the current
/// UTC date, regardless of what the client sent.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert(pool: &PgPool, order: &NewOrder) -> Result<Order, RepositoryError> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "INSERT INTO orders
            (customer_email, customer_name, product_id, product_name, quantity,
             total_price, status, payment_method, transaction_id, order_date)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING {ORDER_COLUMNS}"
    ))
    .bind(&order.customer_email)
    .bind(&order.customer_name)
    .bind(order.product_id)
    .bind(&order.product_name)
    .bind(order.quantity)
    .bind(order.total_price)
    .bind(OrderStatus::Pending)
    .bind(order.payment_method)
    .bind(&order.transaction_id)
    .bind(Utc::now().date_naive())
    .fetch_one(pool)
    .await?;

    Ok(order)
}

/// List every order, newest first (admin dashboard).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Order>, RepositoryError> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(orders)
}

/// List a customer's orders, newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_for_customer(
    pool: &PgPool,
    email: &Email,
) -> Result<Vec<Order>, RepositoryError> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders
         WHERE customer_email = $1
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(email)
    .fetch_all(pool)
    .await?;

    Ok(orders)
}

/// Get one order by id.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get(pool: &PgPool, id: OrderId) -> Result<Option<Order>, RepositoryError> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(order)
}

/// Cancel an order unless it has already been delivered.
///
/// The guard rides in the UPDATE's WHERE clause, so a concurrent delivery
/// cannot slip a cancel in behind it.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a query fails.
pub async fn cancel(pool: &PgPool, id: OrderId) -> Result<CancelOutcome, RepositoryError> {
    let result = sqlx::query("UPDATE orders SET status = $2 WHERE id = $1 AND status <> $3")
        .bind(id)
        .bind(OrderStatus::Cancelled)
        .bind(OrderStatus::Delivered)
        .execute(pool)
        .await?;

    if result.rows_affected() > 0 {
        return Ok(CancelOutcome::Cancelled);
    }

    // Nothing changed: either the order is gone or it is delivered.
    match get(pool, id).await? {
        Some(_) => Ok(CancelOutcome::AlreadyDelivered),
        None => Ok(CancelOutcome::NotFound),
    }
}

/// Set an order's status. Returns `None` when the order does not exist.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the update fails.
pub async fn update_status(
    pool: &PgPool,
    id: OrderId,
    status: OrderStatus,
) -> Result<Option<Order>, RepositoryError> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "UPDATE orders SET status = $2 WHERE id = $1 RETURNING {ORDER_COLUMNS}"
    ))
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    Ok(order)
}
