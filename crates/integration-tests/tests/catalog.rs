//! Integration tests for users and the product catalog.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p gadgetz-api)
//!
//! Run with: cargo test -p gadgetz-integration-tests -- --ignored

use gadgetz_integration_tests::{authenticate, base_url, client, unique_email};
use reqwest::StatusCode;
use serde_json::{Value, json};

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_user_create_is_idempotent() {
    let client = client();
    let base_url = base_url();
    let email = unique_email("user");

    let resp = client
        .post(format!("{base_url}/users/{email}"))
        .json(&json!({ "name": "First Call" }))
        .send()
        .await
        .expect("Failed to create user");
    assert_eq!(resp.status(), StatusCode::OK);
    let first: Value = resp.json().await.expect("Failed to parse user");
    assert_eq!(first.get("role").and_then(Value::as_str), Some("customer"));

    // A second call must return the same account, not overwrite it.
    let resp = client
        .post(format!("{base_url}/users/{email}"))
        .json(&json!({ "name": "Second Call" }))
        .send()
        .await
        .expect("Failed to re-create user");
    assert_eq!(resp.status(), StatusCode::OK);
    let second: Value = resp.json().await.expect("Failed to parse user");

    assert_eq!(first.get("id"), second.get("id"));
    assert_eq!(second.get("name").and_then(Value::as_str), Some("First Call"));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_role_lookup_for_unknown_user_is_null() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/users/role/{}", unique_email("ghost")))
        .send()
        .await
        .expect("Failed to look up role");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body.get("role"), Some(&Value::Null));
}

// ============================================================================
// Product CRUD Tests
// ============================================================================

async fn create_test_product(client: &reqwest::Client, seller: &str) -> Value {
    let resp = client
        .post(format!("{}/products", base_url()))
        .json(&json!({
            "productName": "Integration Test Gadget",
            "price": 49.99,
            "quantity": 5,
            "sellerEmail": seller,
            "category": "integration-tests",
            "images": ["https://example.com/gadget.jpg"]
        }))
        .send()
        .await
        .expect("Failed to create product");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse product")
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_crud_roundtrip() {
    let client = client();
    let base_url = base_url();
    let seller = unique_email("seller");
    authenticate(&client, &seller).await;

    let product = create_test_product(&client, &seller).await;
    let id = product.get("id").and_then(Value::as_i64).expect("Missing id");

    // Detail
    let resp = client
        .get(format!("{base_url}/product/{id}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);

    // Patch
    let resp = client
        .patch(format!("{base_url}/product/{id}"))
        .json(&json!({ "quantity": 3 }))
        .send()
        .await
        .expect("Failed to patch product");
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(patched.get("quantity").and_then(Value::as_i64), Some(3));
    // Untouched fields survive the patch.
    assert_eq!(
        patched.get("productName").and_then(Value::as_str),
        Some("Integration Test Gadget")
    );

    // Delete
    let resp = client
        .delete(format!("{base_url}/product/{id}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);

    // Detail now 404s
    let resp = client
        .get(format!("{base_url}/product/{id}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_list_seller_filter() {
    let client = client();
    let base_url = base_url();
    let seller = unique_email("filter-seller");
    authenticate(&client, &seller).await;

    create_test_product(&client, &seller).await;

    let resp = client
        .get(format!("{base_url}/products?seller={seller}"))
        .send()
        .await
        .expect("Failed to list products");
    assert_eq!(resp.status(), StatusCode::OK);

    let products: Vec<Value> = resp.json().await.expect("Failed to parse products");
    assert_eq!(products.len(), 1);
    assert_eq!(
        products[0].get("sellerEmail").and_then(Value::as_str),
        Some(seller.as_str())
    );
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_mutations_require_auth() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/products"))
        .json(&json!({
            "productName": "Unauthorized Gadget",
            "price": 1.0,
            "quantity": 1,
            "sellerEmail": "nobody@example.com"
        }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_empty_patch_is_rejected() {
    let client = client();
    let base_url = base_url();
    let seller = unique_email("empty-patch");
    authenticate(&client, &seller).await;

    let product = create_test_product(&client, &seller).await;
    let id = product.get("id").and_then(Value::as_i64).expect("Missing id");

    let resp = client
        .patch(format!("{base_url}/product/{id}"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to patch product");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_delete_nonexistent_product_is_404() {
    let client = client();
    let base_url = base_url();
    authenticate(&client, &unique_email("deleter")).await;

    let resp = client
        .delete(format!("{base_url}/product/999999999"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
