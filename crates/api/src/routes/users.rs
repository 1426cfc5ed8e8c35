//! User account routes.

use axum::{
    Json,
    extract::{Path, State},
};

use gadgetz_core::Email;

use crate::db;
use crate::error::Result;
use crate::models::{NewUser, RoleResponse, User};
use crate::state::AppState;

/// `POST /users/{email}` - create an account if none exists.
///
/// An existing account is returned untouched, so frontends can call this on
/// every sign-in without clobbering roles granted later.
///
/// # Errors
///
/// Returns 400 for an unparseable email, 500 on database failure.
pub async fn create_if_absent(
    State(state): State<AppState>,
    Path(email): Path<String>,
    body: Option<Json<NewUser>>,
) -> Result<Json<User>> {
    let email = Email::parse(&email)?;
    let new_user = body.map(|Json(b)| b).unwrap_or_default();

    let user = db::users::create_if_absent(state.pool(), &email, &new_user).await?;
    Ok(Json(user))
}

/// `GET /users/role/{email}` - look up an account's role.
///
/// Responds `{"role": null}` when no account exists, matching the original
/// contract (the frontend treats unknown users as logged-out customers).
///
/// # Errors
///
/// Returns 400 for an unparseable email, 500 on database failure.
pub async fn get_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<RoleResponse>> {
    let email = Email::parse(&email)?;
    let role = db::users::get_role(state.pool(), &email).await?;

    Ok(Json(RoleResponse { role }))
}
