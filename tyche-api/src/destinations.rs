use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tyche_catalog::Destination;

use crate::{error::AppError, parse_id, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/destinations", get(list_destinations))
        .route("/api/destinations/{id}", get(get_destination))
}

async fn list_destinations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Destination>>, AppError> {
    let destinations = state
        .storage
        .list_destinations()
        .await
        .map_err(AppError::internal("Failed to fetch destinations"))?;
    Ok(Json(destinations))
}

async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Destination>, AppError> {
    let id = parse_id(&id, "Invalid destination ID")?;

    state
        .storage
        .get_destination(id)
        .await
        .map_err(AppError::internal("Failed to fetch destination details"))?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("Destination not found".to_string()))
}
