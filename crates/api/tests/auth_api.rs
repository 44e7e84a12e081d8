//! End-to-end tests for API-key authentication and tenant scoping.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use agendo_core::api_keys::generate_api_key;
use agendo_db::repositories::ApiKeyRepo;

/// Insert a key row and return the plaintext to authenticate with.
async fn seed_key(pool: &PgPool, user_id: Option<&str>, is_master: bool) -> String {
    let generated = generate_api_key();
    ApiKeyRepo::create(
        pool,
        "test key",
        user_id,
        is_master,
        &generated.hash,
        &generated.prefix,
    )
    .await
    .unwrap();
    generated.plaintext
}

fn get(uri: &str, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(key) = key {
        builder = builder.header("authorization", format!("Bearer {key}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_key_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = app.oneshot(get("/api/v1/clients", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_key_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(get("/api/v1/clients", Some("not-a-real-key")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tenant_key_lists_its_own_scope(pool: PgPool) {
    let key = seed_key(&pool, Some("user_aaa"), false).await;
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(get("/api/v1/clients", Some(&key)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["data"]["items"], serde_json::json!([]));
    assert_eq!(json["data"]["current_page"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn master_only_routes_reject_tenant_keys(pool: PgPool) {
    let key = seed_key(&pool, Some("user_aaa"), false).await;
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(get("/api/v1/api-keys", Some(&key)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn master_key_may_list_keys(pool: PgPool) {
    let key = seed_key(&pool, None, true).await;
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(get("/api/v1/api-keys", Some(&key)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    // The hash must never appear in responses.
    assert!(items[0].get("key_hash").is_none());
}
