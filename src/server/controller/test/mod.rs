use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};
use test_utils::{builder::TestBuilder, factory};


/// Router over a fresh in-memory database with the user table created.
async fn test_app(api_key: Option<&str>) -> (Router, sea_orm::DatabaseConnection) {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.into_db();

    let app = router(AppState::new(db.clone(), api_key.map(str::to_string)));

    (app, db)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends `request` and returns the status with the decoded JSON body.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

fn assert_failure(body: &Value, message: &str, errors: &[&str]) {
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!(message));
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"], json!(errors));
}
