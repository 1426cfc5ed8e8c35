//! Wishlist types.
//!
//! Wishlist rows keep a full JSON snapshot of the product as it looked when
//! saved; the catalog may change or lose the product afterwards without
//! affecting the wishlist (original document-store behavior).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gadgetz_core::{Email, ProductId, WishlistItemId};

/// A saved wishlist entry.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub user_email: Email,
    pub user_name: Option<String>,
    pub product_id: ProductId,
    /// Product snapshot as saved (JSONB).
    pub product: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /wishlist`: `{user, product}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewWishlistItem {
    pub user: WishlistUser,
    pub product: ProductSnapshot,
}

/// The `user` half of a wishlist submission.
#[derive(Debug, Clone, Deserialize)]
pub struct WishlistUser {
    pub email: Email,
    pub name: Option<String>,
}

/// The `product` half of a wishlist submission: an id plus whatever else the
/// frontend sends, kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Body of `DELETE /wishlist`: both fields are required (400 otherwise).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRemoval {
    pub product_id: Option<ProductId>,
    pub email: Option<Email>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_keeps_extra_fields() {
        let snapshot: ProductSnapshot = serde_json::from_str(
            r#"{"id": 12, "productName": "Keyboard", "price": 59.0}"#,
        )
        .unwrap();
        assert_eq!(snapshot.id, ProductId::new(12));
        assert_eq!(
            snapshot.rest.get("productName"),
            Some(&serde_json::json!("Keyboard"))
        );
    }

    #[test]
    fn test_removal_allows_missing_fields() {
        // Missing fields deserialize as None; the handler turns that into a 400.
        let removal: WishlistRemoval = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert!(removal.product_id.is_none());
        assert!(removal.email.is_some());
    }
}
