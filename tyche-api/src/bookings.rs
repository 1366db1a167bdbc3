use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use tyche_core::{validate_booking_submission_with, Booking};
use tyche_shared::Masked;

use crate::{error::AppError, rejection_message, state::AppState};

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub message: &'static str,
    pub booking: Booking,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/bookings", post(create_booking))
}

/// POST /api/bookings
async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let Json(body) = payload.map_err(rejection_message)?;

    let submission =
        validate_booking_submission_with(body, &state.booking_rules).map_err(AppError::validation)?;

    let booking = state
        .storage
        .create_booking(submission)
        .await
        .map_err(AppError::internal("Failed to create booking"))?;

    // The quote is stored as submitted either way.
    if !state
        .pricing
        .matches_estimate(&booking.service_type, booking.estimated_price)
    {
        warn!(
            booking_id = booking.id,
            service_type = %booking.service_type,
            estimated_price = booking.estimated_price,
            "Estimated price does not match the advertised starting rate"
        );
    }

    info!(
        booking_id = booking.id,
        service_type = %booking.service_type,
        email = %Masked(&booking.email),
        phone = %Masked(&booking.phone),
        "Booking request received"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            message: "Booking request submitted successfully",
            booking,
        }),
    ))
}
