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

fn contact_payload() -> Value {
    json!({
        "name": "Rosie Baker",
        "email": "rosie@example.com",
        "enquiry_type": "general",
        "message": "Do you cater for gluten-free bases?"
    })
}

async fn post_contact(app: &TestApp, payload: &Value, ip: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", ip)
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_contact_submission_succeeds() {
    let app = TestApp::new().await;

    let res = post_contact(&app, &contact_payload(), "10.0.0.1").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn test_contact_rejects_invalid_fields() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "",
        "email": "nope",
        "enquiry_type": "complaint",
        "message": "hi"
    });

    let res = post_contact(&app, &payload, "10.0.0.2").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    let details = body["details"].as_object().unwrap();
    assert!(details.contains_key("name"));
    assert!(details.contains_key("email"));
    assert!(details.contains_key("enquiry_type"));
    assert!(details.contains_key("message"));
}

#[tokio::test]
async fn test_contact_rate_limited_with_retry_after() {
    let app = TestApp::with_quotas(2, 2).await;

    for _ in 0..2 {
        let res = post_contact(&app, &contact_payload(), "10.0.0.3").await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = post_contact(&app, &contact_payload(), "10.0.0.3").await;
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(res.headers().contains_key("retry-after"));

    let body = parse_body(res).await;
    assert!(body["retry_after"].as_u64().unwrap() >= 1);

    // A different client is unaffected.
    let res = post_contact(&app, &contact_payload(), "10.0.0.4").await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_contact_input_is_sanitized() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "<b>Rosie</b>",
        "email": "rosie@example.com",
        "enquiry_type": "feedback",
        "message": "Loved it! <script>alert('x')</script>"
    });

    let res = post_contact(&app, &payload, "10.0.0.5").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let saved = app.state.enquiry_repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(saved.name, "&lt;b&gt;Rosie&lt;/b&gt;");
    assert!(saved.message.contains("&lt;script&gt;"));
    assert!(!saved.message.contains('<'));
}

#[tokio::test]
async fn test_admin_enquiry_workflow() {
    let app = TestApp::new().await;
    let token = app.seed_admin().await;

    let res = post_contact(&app, &contact_payload(), "10.0.0.6").await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/enquiries?status=new")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["pagination"]["total"], 1);

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/admin/enquiries/{}", id))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"status": "read"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "read");

    // Unknown status is rejected.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/admin/enquiries/{}", id))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"status": "resolved"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/admin/enquiries/{}", id))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}
