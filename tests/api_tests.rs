//! API integration tests
//!
//! These run against a live server: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080";

/// Register a throwaway account and return its bearer token
async fn get_auth_token(client: &Client) -> String {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos();
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "username": format!("testuser{}", suffix),
            "password": "testpassword"
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse register response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    let client = Client::new();
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let username = format!("logintest{}", suffix);

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "username": username, "password": "testpassword" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": username, "password": "testpassword" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": "nobody", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_micro_gateway_register_alias() {
    let client = Client::new();
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    let response = client
        .post(format!("{}/micro/auth/register", BASE_URL))
        .json(&json!({
            "username": format!("microtest{}", suffix),
            "password": "testpassword"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_list_books_requires_token() {
    let client = Client::new();

    let response = client
        .get(format!("{}/libro/consultar", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_create_then_list_contains_book() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/libro/crear", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "titulo": "Dune", "anioPublicacion": 1965 }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No generated id");

    let response = client
        .get(format!("{}/libro/consultar", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let books: Value = response.json().await.expect("Failed to parse response");
    let found = books
        .as_array()
        .expect("Expected array of books")
        .iter()
        .any(|b| b["id"].as_i64() == Some(id));
    assert!(found, "Created book not present in listing");
}

#[tokio::test]
#[ignore]
async fn test_partial_update_changes_only_sent_fields() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/libro/crear", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "titulo": "Dune", "anioPublicacion": 1965 }))
        .send()
        .await
        .expect("Failed to send request");
    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No generated id");

    let response = client
        .patch(format!("{}/libro/actualizar/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "titulo": "Dune Messiah" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["titulo"], "Dune Messiah");
    assert_eq!(updated["anioPublicacion"], 1965);
}

#[tokio::test]
#[ignore]
async fn test_partial_update_unknown_id_returns_404() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .patch(format!("{}/libro/actualizar/999999999", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "titulo": "Ghost" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.is_empty(), "404 body should be empty");
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_unknown_category_rejected() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/libro/crear", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "titulo": "Orphan", "categorias": [999999999] }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_cors_preflight_allowed_origin() {
    let client = Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{}/libro/consultar", BASE_URL))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
#[ignore]
async fn test_cors_preflight_unlisted_origin_rejected() {
    let client = Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{}/libro/consultar", BASE_URL))
        .header("Origin", "http://evil.example.com")
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
