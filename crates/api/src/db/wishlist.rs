//! Wishlist repository.

use sqlx::PgPool;

use gadgetz_core::{Email, ProductId};

use super::RepositoryError;
use crate::models::{NewWishlistItem, WishlistItem};

const WISHLIST_COLUMNS: &str = "id, user_email, user_name, product_id, product, created_at";

/// Save a product snapshot to a user's wishlist.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert(pool: &PgPool, item: &NewWishlistItem) -> Result<WishlistItem, RepositoryError> {
    let snapshot = serde_json::to_value(&item.product)
        .map_err(|e| RepositoryError::DataCorruption(format!("unserializable snapshot: {e}")))?;

    let item = sqlx::query_as::<_, WishlistItem>(&format!(
        "INSERT INTO wishlist (user_email, user_name, product_id, product)
         VALUES ($1, $2, $3, $4)
         RETURNING {WISHLIST_COLUMNS}"
    ))
    .bind(&item.user.email)
    .bind(&item.user.name)
    .bind(item.product.id)
    .bind(&snapshot)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// List all wishlist entries for a user, newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_for_user(
    pool: &PgPool,
    email: &Email,
) -> Result<Vec<WishlistItem>, RepositoryError> {
    let items = sqlx::query_as::<_, WishlistItem>(&format!(
        "SELECT {WISHLIST_COLUMNS} FROM wishlist
         WHERE user_email = $1
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(email)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Remove a product from a user's wishlist. Returns rows removed.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the delete fails.
pub async fn delete(
    pool: &PgPool,
    product_id: ProductId,
    email: &Email,
) -> Result<u64, RepositoryError> {
    let result = sqlx::query("DELETE FROM wishlist WHERE product_id = $1 AND user_email = $2")
        .bind(product_id)
        .bind(email)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
