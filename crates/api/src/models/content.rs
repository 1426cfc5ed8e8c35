//! Home page content types: banners and the marquee strip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gadgetz_core::{BannerId, MarqueeItemId};

/// A home page banner.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: BannerId,
    pub title: String,
    pub image: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /banners`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBanner {
    pub title: String,
    pub image: String,
    pub link: Option<String>,
}

/// One entry in the scrolling marquee.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MarqueeItem {
    pub id: MarqueeItemId,
    pub message: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /marquee`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMarqueeItem {
    pub message: String,
    pub link: Option<String>,
}
