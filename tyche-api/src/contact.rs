use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use tyche_core::{validate_contact_submission, Contact};
use tyche_shared::Masked;

use crate::{error::AppError, rejection_message, state::AppState};

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: &'static str,
    pub contact: Contact,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(send_message))
}

/// POST /api/contact
async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let Json(body) = payload.map_err(rejection_message)?;

    let submission = validate_contact_submission(body).map_err(AppError::validation)?;

    let contact = state
        .storage
        .create_contact(submission)
        .await
        .map_err(AppError::internal("Failed to send message"))?;

    info!(contact_id = contact.id, email = %Masked(&contact.email), "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message: "Message sent successfully",
            contact,
        }),
    ))
}
