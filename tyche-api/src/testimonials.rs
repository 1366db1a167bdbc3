use axum::{extract::State, routing::get, Json, Router};
use tyche_catalog::Testimonial;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/testimonials", get(list_testimonials))
}

async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let testimonials = state
        .storage
        .list_testimonials()
        .await
        .map_err(AppError::internal("Failed to fetch testimonials"))?;
    Ok(Json(testimonials))
}
