//! Product catalog types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gadgetz_core::{Email, ProductId};

/// A catalog product.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub product_name: String,
    pub price: Decimal,
    /// Percentage discount, 0 when absent.
    pub discount: Decimal,
    /// Units in stock.
    pub quantity: i32,
    pub seller_email: Email,
    pub seller_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Image URLs (JSONB array).
    pub images: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /products`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: String,
    pub price: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    pub quantity: i32,
    pub seller_email: Email,
    pub seller_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(default = "empty_images")]
    pub images: serde_json::Value,
}

fn empty_images() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// Body of `PATCH /product/{id}`.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub price: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub images: Option<serde_json::Value>,
}

impl ProductPatch {
    /// True when no field is set; such a request is a 400.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.price.is_none()
            && self.discount.is_none()
            && self.quantity.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.images.is_none()
    }
}
