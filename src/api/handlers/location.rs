use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{
    requests::{LocationSlotRequest, PaginationParams, SeedRequest},
    responses::{LocationView, Paginated, Pagination, SeedResponse},
};
use crate::api::extractors::auth::AdminAuth;
use crate::domain::models::location::LocationSlot;
use crate::domain::services::rotation::{self, DEFAULT_SEED_HORIZON_DAYS};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize, Default)]
pub struct LocationListParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

pub async fn list_locations(
    State(state): State<Arc<AppState>>,
    AdminAuth(_user): AdminAuth,
    Query(params): Query<LocationListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = params.pagination.resolve();

    let slots = state.location_repo.list(params.from, params.to, limit, offset).await?;
    let total = state.location_repo.count(params.from, params.to).await?;

    Ok(Json(Paginated {
        items: slots.into_iter().map(LocationView::from).collect(),
        pagination: Pagination::new(page, limit, total),
    }))
}

pub async fn get_location(
    State(state): State<Arc<AppState>>,
    AdminAuth(_user): AdminAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let slot = state
        .location_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".into()))?;

    Ok(Json(LocationView::from(slot)))
}

pub async fn create_location(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Json(payload): Json<LocationSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = payload.validate()?;

    let mut slot = LocationSlot::new(
        payload.name,
        payload.date,
        start,
        end,
        payload.latitude,
        payload.longitude,
    );
    slot.description = payload.description;
    slot.what3words = payload.what3words;
    slot.is_active = payload.is_active.unwrap_or(true);

    // The partial unique index turns a second active slot on the same date
    // into a unique violation, surfaced as 409.
    let created = state.location_repo.create(&slot).await?;
    info!("Admin {} scheduled {} on {}", user.email, created.name, created.date);

    Ok((StatusCode::CREATED, Json(LocationView::from(created))))
}

pub async fn update_location(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(id): Path<String>,
    Json(payload): Json<LocationSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = payload.validate()?;

    let mut slot = state
        .location_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".into()))?;

    slot.name = payload.name;
    slot.description = payload.description;
    slot.date = payload.date;
    slot.start_time = start;
    slot.end_time = end;
    slot.latitude = payload.latitude;
    slot.longitude = payload.longitude;
    slot.what3words = payload.what3words;
    if let Some(is_active) = payload.is_active {
        slot.is_active = is_active;
    }
    slot.updated_at = Utc::now();

    let updated = state.location_repo.update(&slot).await?;
    info!("Admin {} updated location {}", user.email, updated.id);

    Ok(Json(LocationView::from(updated)))
}

pub async fn delete_location(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.location_repo.delete(&id).await?;
    info!("Admin {} deleted location {}", user.email, id);

    Ok(StatusCode::NO_CONTENT)
}

/// Backfills the schedule from the fortnightly rotation. Dates that already
/// carry a slot, or that fall on a recorded exception, are skipped, so the
/// seed is safe to re-run.
pub async fn seed_locations(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Json(payload): Json<SeedRequest>,
) -> Result<impl IntoResponse, AppError> {
    let from = payload.from.unwrap_or_else(|| Utc::now().date_naive());
    let days = payload.days.unwrap_or(DEFAULT_SEED_HORIZON_DAYS).clamp(1, 365);

    let exceptions = state.exception_repo.list().await?;
    let candidates = rotation::generate_seed_slots(from, days, &exceptions);

    let mut created = 0;
    let mut skipped = 0;
    for slot in candidates {
        if state.location_repo.exists_for_date(slot.date).await? {
            skipped += 1;
            continue;
        }
        state.location_repo.create(&slot).await?;
        created += 1;
    }

    info!(
        "Admin {} seeded rotation from {} for {} days: {} created, {} skipped",
        user.email, from, days, created, skipped
    );

    Ok(Json(SeedResponse { created, skipped }))
}
