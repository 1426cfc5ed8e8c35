//! Banner and marquee repository.

use sqlx::PgPool;

use gadgetz_core::{BannerId, MarqueeItemId};

use super::RepositoryError;
use crate::models::{Banner, MarqueeItem, NewBanner, NewMarqueeItem};

/// Insert a banner.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert_banner(pool: &PgPool, banner: &NewBanner) -> Result<Banner, RepositoryError> {
    let banner = sqlx::query_as::<_, Banner>(
        "INSERT INTO banners (title, image, link)
         VALUES ($1, $2, $3)
         RETURNING id, title, image, link, created_at",
    )
    .bind(&banner.title)
    .bind(&banner.image)
    .bind(&banner.link)
    .fetch_one(pool)
    .await?;

    Ok(banner)
}

/// List all banners, newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_banners(pool: &PgPool) -> Result<Vec<Banner>, RepositoryError> {
    let banners = sqlx::query_as::<_, Banner>(
        "SELECT id, title, image, link, created_at FROM banners
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(banners)
}

/// Delete a banner. Returns rows removed (0 or 1).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the delete fails.
pub async fn delete_banner(pool: &PgPool, id: BannerId) -> Result<u64, RepositoryError> {
    let result = sqlx::query("DELETE FROM banners WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Insert a marquee entry.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn insert_marquee(
    pool: &PgPool,
    item: &NewMarqueeItem,
) -> Result<MarqueeItem, RepositoryError> {
    let item = sqlx::query_as::<_, MarqueeItem>(
        "INSERT INTO marquee (message, link)
         VALUES ($1, $2)
         RETURNING id, message, link, created_at",
    )
    .bind(&item.message)
    .bind(&item.link)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// List all marquee entries, oldest first (display order).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_marquee(pool: &PgPool) -> Result<Vec<MarqueeItem>, RepositoryError> {
    let items = sqlx::query_as::<_, MarqueeItem>(
        "SELECT id, message, link, created_at FROM marquee ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Delete a marquee entry. Returns rows removed (0 or 1).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the delete fails.
pub async fn delete_marquee(pool: &PgPool, id: MarqueeItemId) -> Result<u64, RepositoryError> {
    let result = sqlx::query("DELETE FROM marquee WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
