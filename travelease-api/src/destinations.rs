use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use travelease_shared::{Destination, Hotel};
use crate::error::AppError;
use crate::extract::parse_id;
use crate::state::AppState;

const INVALID_ID: &str = "Invalid destination ID";
const NOT_FOUND: &str = "Destination not found";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/destinations", get(list_destinations))
        .route("/api/destinations/popular", get(popular_destinations))
        .route("/api/destinations/{id}", get(get_destination))
        .route("/api/destinations/{id}/hotels", get(destination_hotels))
}

/// GET /api/destinations
async fn list_destinations(State(state): State<AppState>) -> Result<Json<Vec<Destination>>, AppError> {
    Ok(Json(state.catalog.destinations().await?))
}

/// GET /api/destinations/popular
async fn popular_destinations(State(state): State<AppState>) -> Result<Json<Vec<Destination>>, AppError> {
    Ok(Json(state.catalog.popular_destinations().await?))
}

/// GET /api/destinations/{id}
async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Destination>, AppError> {
    let id = parse_id(&id, INVALID_ID)?;
    let destination = state
        .catalog
        .destination(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(Json(destination))
}

/// GET /api/destinations/{id}/hotels
/// 404 when the destination itself is unknown, `[]` when it has no hotels.
async fn destination_hotels(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Hotel>>, AppError> {
    let id = parse_id(&id, INVALID_ID)?;
    if state.catalog.destination(id).await?.is_none() {
        return Err(AppError::not_found(NOT_FOUND));
    }

    Ok(Json(state.catalog.hotels_by_destination(id).await?))
}
