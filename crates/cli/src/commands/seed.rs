//! Seed the database with demo catalog and content data.
//!
//! Intended for local development: gives the frontends something to render
//! without clicking through the seller dashboard first. Safe to re-run; rows
//! are only inserted when their table is empty.

use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;

use super::{CommandError, connect};

/// Seed demo data.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    let products = seed_products(&pool).await?;
    let banners = seed_banners(&pool).await?;
    let marquee = seed_marquee(&pool).await?;

    tracing::info!("Seeding complete!");
    tracing::info!("  Products inserted: {products}");
    tracing::info!("  Banners inserted: {banners}");
    tracing::info!("  Marquee entries inserted: {marquee}");

    Ok(())
}

async fn seed_products(pool: &PgPool) -> Result<u64, CommandError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        tracing::info!("Products table not empty, skipping");
        return Ok(0);
    }

    let demo: [(&str, Decimal, i32, &str); 4] = [
        ("Wireless Mouse", Decimal::new(2499, 2), 40, "accessories"),
        ("Mechanical Keyboard", Decimal::new(8900, 2), 15, "accessories"),
        ("Smart Watch", Decimal::new(12999, 2), 25, "wearables"),
        ("USB-C Hub", Decimal::new(3950, 2), 60, "accessories"),
    ];

    let mut inserted = 0;
    for (name, price, quantity, category) in demo {
        sqlx::query(
            "INSERT INTO products
                (product_name, price, quantity, seller_email, seller_name, category, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(name)
        .bind(price)
        .bind(quantity)
        .bind("demo-seller@gadgetzworld.shop")
        .bind("Demo Seller")
        .bind(category)
        .bind(json!([]))
        .execute(pool)
        .await?;
        inserted += 1;
    }

    Ok(inserted)
}

async fn seed_banners(pool: &PgPool) -> Result<u64, CommandError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM banners")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        tracing::info!("Banners table not empty, skipping");
        return Ok(0);
    }

    sqlx::query(
        "INSERT INTO banners (title, image, link)
         VALUES ($1, $2, $3)",
    )
    .bind("Summer Gadget Sale")
    .bind("https://cdn.gadgetzworld.shop/banners/summer-sale.jpg")
    .bind("/products?category=wearables")
    .execute(pool)
    .await?;

    Ok(1)
}

async fn seed_marquee(pool: &PgPool) -> Result<u64, CommandError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM marquee")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        tracing::info!("Marquee table not empty, skipping");
        return Ok(0);
    }

    sqlx::query("INSERT INTO marquee (message, link) VALUES ($1, $2)")
        .bind("Free shipping on orders over $50!")
        .bind(None::<String>)
        .execute(pool)
        .await?;

    Ok(1)
}
