use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{blog, booking, contact, enquiry, exception, health, location, schedule};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))

        // Public schedule
        .route("/api/v1/schedule/today", get(schedule::get_today))
        .route("/api/v1/schedule/upcoming", get(schedule::get_upcoming))
        .route("/api/v1/schedule/{date}", get(schedule::get_for_date))

        // Public blog
        .route("/api/v1/blog", get(blog::list_published))
        .route("/api/v1/blog/{slug}", get(blog::get_published))

        // Public forms (rate limited per client IP)
        .route("/api/v1/contact", post(contact::submit_contact))
        .route("/api/v1/events", post(booking::submit_booking))

        // Admin schedule
        .route("/api/v1/admin/locations", get(location::list_locations).post(location::create_location))
        .route("/api/v1/admin/locations/seed", post(location::seed_locations))
        .route("/api/v1/admin/locations/{id}", get(location::get_location).put(location::update_location).delete(location::delete_location))
        .route("/api/v1/admin/exceptions", get(exception::list_exceptions).post(exception::upsert_exception))
        .route("/api/v1/admin/exceptions/{date}", delete(exception::delete_exception))

        // Admin inbox
        .route("/api/v1/admin/enquiries", get(enquiry::list_enquiries))
        .route("/api/v1/admin/enquiries/{id}", put(enquiry::update_enquiry_status).delete(enquiry::delete_enquiry))
        .route("/api/v1/admin/bookings", get(booking::list_bookings))
        .route("/api/v1/admin/bookings/{id}", put(booking::update_booking_status).delete(booking::delete_booking))

        // Admin blog
        .route("/api/v1/admin/blog", get(blog::list_all).post(blog::create_post))
        .route("/api/v1/admin/blog/{id}", get(blog::get_post).put(blog::update_post).delete(blog::delete_post))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
