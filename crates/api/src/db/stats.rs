//! Admin statistics: storewide totals and a 30-day daily series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::RepositoryError;

/// Length of the trailing window for the daily series, in days.
pub const STAT_WINDOW_DAYS: i32 = 30;

/// Storewide totals.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StatTotals {
    pub total_users: i64,
    pub total_products: i64,
    pub total_orders: i64,
    /// Sum of `total_price` across all non-cancelled orders.
    pub total_revenue: Decimal,
}

/// One day's bucket in the trailing window.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub date: NaiveDate,
    pub orders: i64,
    pub revenue: Decimal,
}

/// Compute storewide totals in one round trip.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn totals(pool: &PgPool) -> Result<StatTotals, RepositoryError> {
    let totals = sqlx::query_as::<_, StatTotals>(
        "SELECT
            (SELECT COUNT(*) FROM users)    AS total_users,
            (SELECT COUNT(*) FROM products) AS total_products,
            (SELECT COUNT(*) FROM orders)   AS total_orders,
            (SELECT COALESCE(SUM(total_price), 0) FROM orders WHERE status <> 'cancelled')
                AS total_revenue",
    )
    .fetch_one(pool)
    .await?;

    Ok(totals)
}

/// Date-bucketed order count and revenue over the trailing 30-day window.
///
/// Days without orders are filled with zero buckets so the series always has
/// one entry per day, oldest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn daily_series(pool: &PgPool) -> Result<Vec<DailyStat>, RepositoryError> {
    let series = sqlx::query_as::<_, DailyStat>(
        "SELECT
            d::date AS date,
            COALESCE(COUNT(o.id), 0)             AS orders,
            COALESCE(SUM(o.total_price), 0)      AS revenue
         FROM generate_series(
                CURRENT_DATE - ($1 - 1) * INTERVAL '1 day',
                CURRENT_DATE,
                INTERVAL '1 day'
              ) AS d
         LEFT JOIN orders o
           ON o.order_date = d::date AND o.status <> 'cancelled'
         GROUP BY d
         ORDER BY d",
    )
    .bind(STAT_WINDOW_DAYS)
    .fetch_all(pool)
    .await?;

    Ok(series)
}
