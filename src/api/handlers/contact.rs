use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{requests::ContactRequest, responses::SubmissionResponse};
use crate::api::extractors::client_ip::ClientIp;
use crate::api::sanitize::sanitize_html;
use crate::domain::models::enquiry::ContactEnquiry;
use crate::error::AppError;
use crate::state::AppState;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ClientIp(client_ip): ClientIp,
    Json(payload): Json<ContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.rate_limiter.check_contact(&client_ip)?;
    payload.validate()?;

    let enquiry = ContactEnquiry::new(
        sanitize_html(&payload.name),
        payload.email,
        payload.enquiry_type,
        sanitize_html(&payload.message),
    );

    let saved = state.enquiry_repo.create(&enquiry).await?;
    info!("Contact enquiry {} received ({})", saved.id, saved.enquiry_type);

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            success: true,
            message: "Thanks for getting in touch. We'll reply within two working days.".into(),
            id: saved.id,
        }),
    ))
}
