//! Integration tests for banners and marquee content.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p gadgetz-api)
//!
//! Run with: cargo test -p gadgetz-integration-tests -- --ignored

use gadgetz_integration_tests::{authenticate, base_url, client, unique_email};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_banner_create_list_remove() {
    let client = client();
    let base_url = base_url();
    authenticate(&client, &unique_email("banner-admin")).await;

    let resp = client
        .post(format!("{base_url}/banners"))
        .json(&json!({
            "title": "Integration Banner",
            "image": "https://example.com/banner.jpg",
            "link": "/products"
        }))
        .send()
        .await
        .expect("Failed to create banner");
    assert_eq!(resp.status(), StatusCode::OK);
    let banner: Value = resp.json().await.expect("Failed to parse banner");
    let id = banner.get("id").and_then(Value::as_i64).expect("Missing id");

    // Reads are public: no cookie store on this client.
    let resp = reqwest::Client::new()
        .get(format!("{base_url}/banners"))
        .send()
        .await
        .expect("Failed to list banners");
    assert_eq!(resp.status(), StatusCode::OK);
    let banners: Vec<Value> = resp.json().await.expect("Failed to parse banners");
    assert!(
        banners
            .iter()
            .any(|b| b.get("id").and_then(Value::as_i64) == Some(id))
    );

    let resp = client
        .delete(format!("{base_url}/banners/{id}"))
        .send()
        .await
        .expect("Failed to delete banner");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_marquee_create_list_remove() {
    let client = client();
    let base_url = base_url();
    authenticate(&client, &unique_email("marquee-admin")).await;

    let resp = client
        .post(format!("{base_url}/marquee"))
        .json(&json!({ "message": "Integration marquee message" }))
        .send()
        .await
        .expect("Failed to create marquee entry");
    assert_eq!(resp.status(), StatusCode::OK);
    let item: Value = resp.json().await.expect("Failed to parse marquee entry");
    let id = item.get("id").and_then(Value::as_i64).expect("Missing id");

    let resp = reqwest::Client::new()
        .get(format!("{base_url}/marquee"))
        .send()
        .await
        .expect("Failed to list marquee");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .delete(format!("{base_url}/marquee/{id}"))
        .send()
        .await
        .expect("Failed to delete marquee entry");
    assert_eq!(resp.status(), StatusCode::OK);

    // Deleting again 404s
    let resp = client
        .delete(format!("{base_url}/marquee/{id}"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_content_mutations_require_auth() {
    let base_url = base_url();
    let anon = reqwest::Client::new();

    let resp = anon
        .post(format!("{base_url}/banners"))
        .json(&json!({ "title": "Nope", "image": "x.jpg" }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = anon
        .post(format!("{base_url}/marquee"))
        .json(&json!({ "message": "Nope" }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
