use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{
    requests::{EventBookingRequest, PaginationParams, StatusUpdateRequest},
    responses::{Paginated, Pagination, SubmissionResponse},
};
use crate::api::extractors::{auth::AdminAuth, client_ip::ClientIp};
use crate::api::sanitize::sanitize_html;
use crate::domain::models::booking::{EventBooking, BOOKING_STATUSES};
use crate::error::AppError;
use crate::state::AppState;

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    ClientIp(client_ip): ClientIp,
    Json(payload): Json<EventBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.rate_limiter.check_booking(&client_ip)?;
    payload.validate(Utc::now().date_naive())?;

    let mut booking = EventBooking::new(
        payload.event_type,
        payload.event_date,
        sanitize_html(&payload.location),
        payload.guest_count,
        sanitize_html(&payload.name),
        payload.email,
    );
    booking.notes = payload.notes.as_deref().map(sanitize_html);

    let saved = state.booking_repo.create(&booking).await?;
    info!("Event booking {} received for {}", saved.id, saved.event_date);

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            success: true,
            message: "Booking enquiry received. We'll confirm availability shortly.".into(),
            id: saved.id,
        }),
    ))
}

#[derive(Deserialize, Default)]
pub struct BookingListParams {
    pub status: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    AdminAuth(_user): AdminAuth,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = params.pagination.resolve();
    let status = params.status.as_deref();

    let bookings = state.booking_repo.list(status, limit, offset).await?;
    let total = state.booking_repo.count(status).await?;

    Ok(Json(Paginated {
        items: bookings,
        pagination: Pagination::new(page, limit, total),
    }))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate(&BOOKING_STATUSES)?;

    let updated = state.booking_repo.update_status(&id, &payload.status).await?;
    info!("Admin {} set booking {} to {}", user.email, updated.id, updated.status);

    Ok(Json(updated))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_repo.delete(&id).await?;
    info!("Admin {} deleted booking {}", user.email, id);

    Ok(StatusCode::NO_CONTENT)
}
