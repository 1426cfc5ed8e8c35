//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring a valid token cookie in route handlers.
//! The token is the only policy: any valid token grants access to every
//! protected route.

use axum::{
    Json,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::models::CurrentUser;
use crate::services::token::TOKEN_COOKIE_NAME;
use crate::state::AppState;

/// Extractor that requires a valid token cookie.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Rejection returned when the token cookie is missing or invalid.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "unauthorized access" })),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(TOKEN_COOKIE_NAME).ok_or(AuthRejection)?;

        let email = state
            .tokens()
            .verify(token.value())
            .map_err(|_| AuthRejection)?;

        Ok(Self(CurrentUser { email }))
    }
}
