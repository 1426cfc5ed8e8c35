//! Cart line types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gadgetz_core::{CartItemId, Email, ProductId};

/// One line in a user's cart.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub user_email: Email,
    pub product_id: ProductId,
    pub product_name: String,
    /// Unit price copied from the product at add time.
    pub price: Decimal,
    pub image: Option<String>,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /carts`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub user_email: Email,
    pub product_id: ProductId,
    pub product_name: String,
    pub price: Decimal,
    pub image: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

const fn default_quantity() -> i32 {
    1
}

/// Body of `PATCH /carts/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuantityUpdate {
    pub quantity: i32,
}
