mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn booking_payload() -> Value {
    json!({
        "name": "Tom Field",
        "email": "tom@example.com",
        "event_type": "wedding",
        "event_date": (Utc::now().date_naive() + Duration::days(60)).format("%Y-%m-%d").to_string(),
        "location": "Sudeley Castle grounds",
        "guest_count": "75-100",
        "notes": "Evening reception, pizza from 7pm"
    })
}

async fn post_booking(app: &TestApp, payload: &Value, ip: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/events")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", ip)
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_booking_submission_succeeds() {
    let app = TestApp::new().await;

    let res = post_booking(&app, &booking_payload(), "10.1.0.1").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);

    let saved = app.state.booking_repo
        .find_by_id(body["id"].as_str().unwrap())
        .await.unwrap().unwrap();
    assert_eq!(saved.status, "new");
    assert_eq!(saved.guest_count, "75-100");
}

#[tokio::test]
async fn test_booking_rejects_past_date() {
    let app = TestApp::new().await;

    let mut payload = booking_payload();
    payload["event_date"] = json!((Utc::now().date_naive() - Duration::days(1)).format("%Y-%m-%d").to_string());

    let res = post_booking(&app, &payload, "10.1.0.2").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    assert!(body["details"].as_object().unwrap().contains_key("event_date"));
}

#[tokio::test]
async fn test_booking_rejects_same_day() {
    let app = TestApp::new().await;

    let mut payload = booking_payload();
    payload["event_date"] = json!(Utc::now().date_naive().format("%Y-%m-%d").to_string());

    let res = post_booking(&app, &payload, "10.1.0.3").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_rejects_unknown_guest_count() {
    let app = TestApp::new().await;

    let mut payload = booking_payload();
    payload["guest_count"] = json!("about 80");

    let res = post_booking(&app, &payload, "10.1.0.4").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    assert!(body["details"].as_object().unwrap().contains_key("guest_count"));
}

#[tokio::test]
async fn test_booking_rate_limited() {
    let app = TestApp::with_quotas(5, 2).await;

    for _ in 0..2 {
        let res = post_booking(&app, &booking_payload(), "10.1.0.5").await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = post_booking(&app, &booking_payload(), "10.1.0.5").await;
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(res.headers().contains_key("retry-after"));
}

#[tokio::test]
async fn test_contact_and_booking_limits_are_independent() {
    let app = TestApp::with_quotas(1, 1).await;
    let ip = "10.1.0.6";

    let res = post_booking(&app, &booking_payload(), ip).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Booking quota is spent, the contact quota for the same IP is not.
    let contact = json!({
        "name": "Tom Field",
        "email": "tom@example.com",
        "enquiry_type": "general",
        "message": "Separate question about menus."
    });
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", ip)
            .body(Body::from(contact.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_admin_booking_status_flow() {
    let app = TestApp::new().await;
    let token = app.seed_admin().await;

    let res = post_booking(&app, &booking_payload(), "10.1.0.7").await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/bookings")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["pagination"]["total"], 1);

    for status in ["replied", "booked"] {
        let res = app.router.clone().oneshot(
            Request::builder().method("PUT").uri(format!("/api/v1/admin/bookings/{}", id))
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"status": status}).to_string())).unwrap()
        ).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(parse_body(res).await["status"], status);
    }

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/admin/bookings/{}", id))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}
