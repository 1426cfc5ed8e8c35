//! Product repository.

use sqlx::PgPool;

use gadgetz_core::{Email, ProductId};

use super::RepositoryError;
use crate::models::{NewProduct, Product, ProductPatch};

const PRODUCT_COLUMNS: &str = "id, product_name, price, discount, quantity, seller_email, \
                               seller_name, category, description, images, created_at";

/// Insert a new product.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert(pool: &PgPool, product: &NewProduct) -> Result<Product, RepositoryError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products
            (product_name, price, discount, quantity, seller_email, seller_name,
             category, description, images)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(&product.product_name)
    .bind(product.price)
    .bind(product.discount)
    .bind(product.quantity)
    .bind(&product.seller_email)
    .bind(&product.seller_name)
    .bind(&product.category)
    .bind(&product.description)
    .bind(&product.images)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// List products, optionally filtered by category and/or seller.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list(
    pool: &PgPool,
    category: Option<&str>,
    seller: Option<&Email>,
) -> Result<Vec<Product>, RepositoryError> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products
         WHERE ($1::text IS NULL OR category = $1)
           AND ($2::text IS NULL OR seller_email = $2)
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(category)
    .bind(seller)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Get one product by id.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get(pool: &PgPool, id: ProductId) -> Result<Option<Product>, RepositoryError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Apply a partial update; absent fields keep their current value.
///
/// Returns `None` when the product does not exist.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the update fails.
pub async fn update(
    pool: &PgPool,
    id: ProductId,
    patch: &ProductPatch,
) -> Result<Option<Product>, RepositoryError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products SET
            product_name = COALESCE($2, product_name),
            price        = COALESCE($3, price),
            discount     = COALESCE($4, discount),
            quantity     = COALESCE($5, quantity),
            category     = COALESCE($6, category),
            description  = COALESCE($7, description),
            images       = COALESCE($8, images)
         WHERE id = $1
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(id)
    .bind(&patch.product_name)
    .bind(patch.price)
    .bind(patch.discount)
    .bind(patch.quantity)
    .bind(&patch.category)
    .bind(&patch.description)
    .bind(&patch.images)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Delete a product. Returns the number of rows removed (0 or 1).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the delete fails.
pub async fn delete(pool: &PgPool, id: ProductId) -> Result<u64, RepositoryError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
