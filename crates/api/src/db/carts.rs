//! Cart repository.

use sqlx::PgPool;

use gadgetz_core::{CartItemId, Email};

use super::RepositoryError;
use crate::models::{CartItem, NewCartItem};

const CART_COLUMNS: &str =
    "id, user_email, product_id, product_name, price, image, quantity, created_at";

/// Add a line to a user's cart.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert(pool: &PgPool, item: &NewCartItem) -> Result<CartItem, RepositoryError> {
    let item = sqlx::query_as::<_, CartItem>(&format!(
        "INSERT INTO carts (user_email, product_id, product_name, price, image, quantity)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {CART_COLUMNS}"
    ))
    .bind(&item.user_email)
    .bind(item.product_id)
    .bind(&item.product_name)
    .bind(item.price)
    .bind(&item.image)
    .bind(item.quantity)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// List all cart lines for a user, newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_for_user(pool: &PgPool, email: &Email) -> Result<Vec<CartItem>, RepositoryError> {
    let items = sqlx::query_as::<_, CartItem>(&format!(
        "SELECT {CART_COLUMNS} FROM carts
         WHERE user_email = $1
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(email)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Set the quantity on a cart line.
///
/// Returns `None` when the line does not exist. Quantity validation happens
/// at the route boundary.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the update fails.
pub async fn update_quantity(
    pool: &PgPool,
    id: CartItemId,
    quantity: i32,
) -> Result<Option<CartItem>, RepositoryError> {
    let item = sqlx::query_as::<_, CartItem>(&format!(
        "UPDATE carts SET quantity = $2 WHERE id = $1 RETURNING {CART_COLUMNS}"
    ))
    .bind(id)
    .bind(quantity)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

/// Remove a cart line. Returns rows removed (0 or 1).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the delete fails.
pub async fn delete(pool: &PgPool, id: CartItemId) -> Result<u64, RepositoryError> {
    let result = sqlx::query("DELETE FROM carts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
