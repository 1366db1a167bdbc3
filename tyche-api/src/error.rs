use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tyche_core::ValidationError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    /// `message` goes to the client; `cause` only to the log.
    InternalServerError {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl AppError {
    pub fn validation(err: ValidationError) -> Self {
        AppError::ValidationError(err.message().to_string())
    }

    /// For `map_err`: turns any failure into a 500 carrying a fixed message.
    pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        move |err| AppError::InternalServerError {
            message,
            cause: err.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError { message, cause } => {
                tracing::error!("Internal Server Error: {}: {:#}", message, cause);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
