//! Order types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gadgetz_core::{Email, OrderId, OrderStatus, PaymentMethod, ProductId};

/// A placed order.
///
/// Product fields are copied snapshots, not foreign keys: deleting a product
/// never touches past orders.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_email: Email,
    pub customer_name: Option<String>,
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
    /// Stamped server-side in UTC at placement.
    pub order_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /orders`.
///
/// Status and order date are server-assigned; anything the client sends for
/// them is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_email: Email,
    pub customer_name: Option<String>,
    pub product_id: Option<ProductId>,
    pub product_name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    pub total_price: Decimal,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
}

const fn default_quantity() -> i32 {
    1
}

/// Body of `PATCH /update-order-status/{id}`.
///
/// Carries the raw string so the handler can answer an unknown status with a
/// 400 and a readable message instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}
