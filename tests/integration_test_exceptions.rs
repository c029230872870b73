mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_exception_upsert_replaces_existing() {
    let app = TestApp::new().await;
    let token = app.seed_admin().await;

    let first = json!({
        "date": "2026-09-14",
        "kind": "not-trading",
        "description": "Oven maintenance"
    });
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/exceptions")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(first.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let second = json!({
        "date": "2026-09-14",
        "kind": "private-event",
        "description": "Wedding booking took the evening"
    });
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/exceptions")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(second.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/exceptions")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["kind"], "private-event");
}

#[tokio::test]
async fn test_exception_kind_validated() {
    let app = TestApp::new().await;
    let token = app.seed_admin().await;

    let payload = json!({
        "date": "2026-09-14",
        "kind": "holiday"
    });
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/exceptions")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exception_delete() {
    let app = TestApp::new().await;
    let token = app.seed_admin().await;

    let payload = json!({
        "date": "2026-10-01",
        "kind": "not-trading"
    });
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/exceptions")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri("/api/v1/admin/exceptions/2026-10-01")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/exceptions")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_exceptions_require_auth() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/exceptions")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
