mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, NaiveTime, Utc};
use common::TestApp;
use serde_json::Value;
use tower::ServiceExt;
use woodfired_backend::domain::models::location::LocationSlot;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn evening_slot(name: &str, date: chrono::NaiveDate) -> LocationSlot {
    LocationSlot::new(
        name.to_string(),
        date,
        NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        51.9296,
        -1.7235,
    )
}

#[tokio::test]
async fn test_today_with_active_slot() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();

    app.state
        .location_repo
        .create(&evening_slot("Stow-on-the-Wold Market Square", today))
        .await
        .unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/schedule/today")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["location"]["name"], "Stow-on-the-Wold Market Square");
    assert_eq!(body["location"]["display_time"], "6:00 PM - 9:00 PM");
}

#[tokio::test]
async fn test_closed_day_is_200_not_404() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/schedule/today")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["status"], "closed");
    assert!(body["location"].is_null());
}

#[tokio::test]
async fn test_inactive_slot_counts_as_closed() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();

    let mut slot = evening_slot("Cancelled Pitch", today);
    slot.is_active = false;
    app.state.location_repo.create(&slot).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/schedule/today")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert_eq!(body["status"], "closed");
}

#[tokio::test]
async fn test_exception_does_not_close_persisted_slot() {
    let app = TestApp::new().await;
    let token = app.seed_admin().await;
    let date = Utc::now().date_naive() + Duration::days(2);

    app.state
        .location_repo
        .create(&evening_slot("Cirencester Market Place", date))
        .await
        .unwrap();

    // Exceptions gate the seeder, not rows already in the schedule.
    let payload = serde_json::json!({
        "date": date.format("%Y-%m-%d").to_string(),
        "kind": "not-trading"
    });
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/exceptions")
            .header("authorization", format!("Bearer {}", token))
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/schedule/{}", date.format("%Y-%m-%d")))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["location"]["name"], "Cirencester Market Place");
}

#[tokio::test]
async fn test_specific_date_lookup() {
    let app = TestApp::new().await;
    let future = Utc::now().date_naive() + Duration::days(5);

    app.state
        .location_repo
        .create(&evening_slot("Broadway Village Green", future))
        .await
        .unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/schedule/{}", future.format("%Y-%m-%d")))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["location"]["name"], "Broadway Village Green");
}

#[tokio::test]
async fn test_past_date_is_flagged_past() {
    let app = TestApp::new().await;
    let yesterday = Utc::now().date_naive() - Duration::days(1);

    app.state
        .location_repo
        .create(&evening_slot("Old Pitch", yesterday))
        .await
        .unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/schedule/{}", yesterday.format("%Y-%m-%d")))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert_eq!(body["status"], "past");
    assert_eq!(body["location"]["name"], "Old Pitch");
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/schedule/not-a-date")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upcoming_ordered_and_bounded() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();

    // Inserted out of order; past and beyond-horizon slots should not appear.
    for offset in [3i64, 1, 7, -2, 200] {
        let date = today + Duration::days(offset);
        app.state
            .location_repo
            .create(&evening_slot(&format!("Pitch {}", offset), date))
            .await
            .unwrap();
    }

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/schedule/upcoming?days=14")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let locations = body["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 3);
    assert_eq!(locations[0]["name"], "Pitch 1");
    assert_eq!(locations[1]["name"], "Pitch 3");
    assert_eq!(locations[2]["name"], "Pitch 7");
}

#[tokio::test]
async fn test_upcoming_respects_limit() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive();

    for offset in 1..=5i64 {
        app.state
            .location_repo
            .create(&evening_slot(&format!("Pitch {}", offset), today + Duration::days(offset)))
            .await
            .unwrap();
    }

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/schedule/upcoming?days=30&limit=2")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    assert_eq!(body["locations"].as_array().unwrap().len(), 2);
}
