//! Session routes: token issuance and logout.
//!
//! `POST /jwt` trades an email for a signed token in an HTTP-only cookie.
//! The frontend calls it right after its own sign-in flow completes; the
//! server does not re-verify the email. `GET /logout` clears the cookie.

use axum::{Json, extract::State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{Value, json};

use gadgetz_core::Email;

use crate::error::Result;
use crate::services::token::TOKEN_COOKIE_NAME;
use crate::state::AppState;

/// Body of `POST /jwt`.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: Email,
}

/// Issue a token for the given email and set it as an HTTP-only cookie.
///
/// # Errors
///
/// Returns an error if signing fails.
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<TokenRequest>,
) -> Result<(CookieJar, Json<Value>)> {
    let token = state.tokens().issue(&body.email)?;

    tracing::debug!(email = %body.email, "Issued session token");

    let jar = jar.add(session_cookie(token, state.config().is_secure()));
    Ok((jar, Json(json!({ "success": true }))))
}

/// Clear the token cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    // Removal must match the path the cookie was set with.
    let mut expired = session_cookie(String::new(), state.config().is_secure());
    expired.make_removal();

    (jar.add(expired), Json(json!({ "success": true })))
}

/// Build the session cookie with the flags the deployment needs.
///
/// Cross-site frontends need `SameSite=None` (which requires Secure);
/// local development uses `Strict` over plain HTTP.
fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    let same_site = if secure { SameSite::None } else { SameSite::Strict };

    Cookie::build((TOKEN_COOKIE_NAME, token))
        .http_only(true)
        .secure(secure)
        .same_site(same_site)
        .path("/")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_is_http_only() {
        let cookie = session_cookie("abc".to_string(), false);
        assert_eq!(cookie.name(), TOKEN_COOKIE_NAME);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn test_session_cookie_cross_site_in_production() {
        let cookie = session_cookie("abc".to_string(), true);
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.secure(), Some(true));
    }
}
