use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tyche_catalog::{Service, ServiceType};

use crate::{error::AppError, parse_id, state::AppState};

const FETCH_FAILED: &str = "Failed to fetch services";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/services", get(list_services))
        .route("/api/services/{service_type}", get(list_services_by_type))
        .route("/api/services/detail/{id}", get(get_service))
}

/// GET /api/services
async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, AppError> {
    let services = state
        .storage
        .list_services()
        .await
        .map_err(AppError::internal(FETCH_FAILED))?;
    Ok(Json(services))
}

/// GET /api/services/{service_type}
async fn list_services_by_type(
    State(state): State<AppState>,
    Path(service_type): Path<String>,
) -> Result<Json<Vec<Service>>, AppError> {
    let service_type: ServiceType = service_type
        .parse()
        .map_err(|_| AppError::ValidationError("Invalid service type".to_string()))?;

    let services = state
        .storage
        .list_services_by_type(service_type)
        .await
        .map_err(AppError::internal(FETCH_FAILED))?;
    Ok(Json(services))
}

/// GET /api/services/detail/{id}
async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, AppError> {
    let id = parse_id(&id, "Invalid service ID")?;

    state
        .storage
        .get_service(id)
        .await
        .map_err(AppError::internal("Failed to fetch service details"))?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("Service not found".to_string()))
}
