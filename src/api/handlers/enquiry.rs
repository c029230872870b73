use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{
    requests::{PaginationParams, StatusUpdateRequest},
    responses::{Paginated, Pagination},
};
use crate::api::extractors::auth::AdminAuth;
use crate::domain::models::enquiry::ENQUIRY_STATUSES;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize, Default)]
pub struct EnquiryListParams {
    pub status: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

pub async fn list_enquiries(
    State(state): State<Arc<AppState>>,
    AdminAuth(_user): AdminAuth,
    Query(params): Query<EnquiryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = params.pagination.resolve();
    let status = params.status.as_deref();

    let enquiries = state.enquiry_repo.list(status, limit, offset).await?;
    let total = state.enquiry_repo.count(status).await?;

    Ok(Json(Paginated {
        items: enquiries,
        pagination: Pagination::new(page, limit, total),
    }))
}

pub async fn update_enquiry_status(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate(&ENQUIRY_STATUSES)?;

    let updated = state.enquiry_repo.update_status(&id, &payload.status).await?;
    info!("Admin {} set enquiry {} to {}", user.email, updated.id, updated.status);

    Ok(Json(updated))
}

pub async fn delete_enquiry(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.enquiry_repo.delete(&id).await?;
    info!("Admin {} deleted enquiry {}", user.email, id);

    Ok(StatusCode::NO_CONTENT)
}
