#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub async fn setup_app() -> (Router, SqlitePool) {
    let pool = marketplace_backend::database::pool::connect("sqlite::memory:", 1)
        .await
        .expect("pool");
    marketplace_backend::database::run_migrations(&pool)
        .await
        .expect("migrations");

    let state = marketplace_backend::AppState::new(pool.clone());
    (marketplace_backend::routes::router(state), pool)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let (status, bytes) = send(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, json)
}

pub async fn send_text(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, String) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, String::from_utf8(bytes).expect("utf-8 body"))
}
