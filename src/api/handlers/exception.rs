use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::ExceptionRequest;
use crate::api::extractors::auth::AdminAuth;
use crate::domain::models::exception::ScheduleException;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_exceptions(
    State(state): State<Arc<AppState>>,
    AdminAuth(_user): AdminAuth,
) -> Result<impl IntoResponse, AppError> {
    let exceptions = state.exception_repo.list().await?;
    Ok(Json(exceptions))
}

/// One exception per date; a repeat submission replaces the earlier record.
pub async fn upsert_exception(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Json(payload): Json<ExceptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut exception = ScheduleException::new(payload.date, payload.kind);
    exception.description = payload.description;

    let saved = state.exception_repo.upsert(&exception).await?;
    info!("Admin {} marked {} as {}", user.email, saved.date, saved.kind);

    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn delete_exception(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date, expected YYYY-MM-DD".into()))?;

    state.exception_repo.delete(date).await?;
    info!("Admin {} cleared exception on {}", user.email, date);

    Ok(StatusCode::NO_CONTENT)
}
