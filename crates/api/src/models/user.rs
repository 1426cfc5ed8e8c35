//! User account types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gadgetz_core::{Email, UserId, UserRole};

/// A user account row.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// The account email (unique, lowercase).
    pub email: Email,
    /// Display name supplied at signup, if any.
    pub name: Option<String>,
    /// Avatar URL supplied at signup, if any.
    pub image: Option<String>,
    /// Account role. New accounts are always `customer`.
    pub role: UserRole,
    /// Signup timestamp (server-side).
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /users/{email}`.
///
/// The email lives in the path; the body only carries optional profile data.
/// Any role supplied by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Response of `GET /users/role/{email}`.
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    /// `None` when no account exists for the email.
    pub role: Option<UserRole>,
}

/// The authenticated caller, decoded from the token cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: Email,
}
