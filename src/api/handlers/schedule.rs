use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::dtos::responses::{DayView, UpcomingView};
use crate::domain::services::schedule::{DEFAULT_HORIZON_DAYS, MAX_UPCOMING_RESULTS};
use crate::error::AppError;
use crate::state::AppState;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub async fn get_today(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let today = today();
    let resolution = state.schedule_service.resolve(today, today).await?;
    Ok(Json(DayView::from_resolution(today, resolution)))
}

pub async fn get_for_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date, expected YYYY-MM-DD".into()))?;

    let resolution = state.schedule_service.resolve(date, today()).await?;
    Ok(Json(DayView::from_resolution(date, resolution)))
}

#[derive(Deserialize, Default)]
pub struct UpcomingParams {
    pub days: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn get_upcoming(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UpcomingParams>,
) -> Result<impl IntoResponse, AppError> {
    let horizon = params.days.unwrap_or(DEFAULT_HORIZON_DAYS);
    let limit = params.limit.unwrap_or(MAX_UPCOMING_RESULTS);

    let slots = state.schedule_service.upcoming(today(), horizon, limit).await?;
    Ok(Json(UpcomingView {
        locations: slots.into_iter().map(Into::into).collect(),
    }))
}
