//! Database operations for the GadgetzWorld `PostgreSQL` database.
//!
//! # Tables
//!
//! - `users` - Accounts keyed by email (role defaults to `customer`)
//! - `products` - Catalog entries owned by sellers
//! - `wishlist` - Per-user product snapshots
//! - `carts` - Per-user cart lines
//! - `orders` - Placed orders with lifecycle status
//! - `banners` - Home page banner content
//! - `marquee` - Home page marquee content
//!
//! Rows reference each other by copied snapshot, not by foreign key; the only
//! atomicity is the single-row statement. This mirrors the document-store
//! semantics the frontend was built against.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p gadgetz-cli -- migrate
//! ```

pub mod carts;
pub mod content;
pub mod orders;
pub mod products;
pub mod stats;
pub mod users;
pub mod wishlist;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
