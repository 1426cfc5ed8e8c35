//! Integration tests for GadgetzWorld.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p gadgetz-cli -- migrate
//!
//! # Start the API server
//! cargo run -p gadgetz-api
//!
//! # Run integration tests
//! cargo test -p gadgetz-integration-tests -- --ignored
//! ```
//!
//! Tests talk to a live server over HTTP; they are `#[ignore]`d so plain
//! `cargo test` stays hermetic.

use reqwest::Client;
use serde_json::json;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("GADGETZ_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Create an HTTP client with a cookie store, so the token cookie set by
/// `POST /jwt` is carried on subsequent requests.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Generate a unique throwaway email for this test run.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@integration.test", uuid::Uuid::new_v4())
}

/// Obtain a session token cookie for the given email.
///
/// # Panics
///
/// Panics if the server is unreachable or the token request fails.
pub async fn authenticate(client: &Client, email: &str) {
    let resp = client
        .post(format!("{}/jwt", base_url()))
        .json(&json!({ "email": email }))
        .send()
        .await
        .expect("Failed to request token");

    assert!(
        resp.status().is_success(),
        "Token request failed with status {}",
        resp.status()
    );
}
