use axum::{
    extract::rejection::JsonRejection,
    http::{header, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod contact;
pub mod destinations;
pub mod error;
pub mod services;
pub mod state;
pub mod testimonials;

pub use error::AppError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // The site frontend is served from its own origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .merge(services::routes())
        .merge(destinations::routes())
        .merge(testimonials::routes())
        .merge(bookings::routes())
        .merge(contact::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Path ids must be plain base-10 integers.
pub(crate) fn parse_id(raw: &str, message: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::ValidationError(message.to_string()))
}

/// Unreadable bodies are reported like any other invalid submission.
pub(crate) fn rejection_message(rejection: JsonRejection) -> AppError {
    AppError::ValidationError(format!("Validation error: {}", rejection.body_text()))
}
