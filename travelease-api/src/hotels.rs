use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use travelease_shared::Hotel;
use crate::error::AppError;
use crate::extract::parse_id;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/hotels", get(list_hotels))
        .route("/api/hotels/featured", get(featured_hotels))
        .route("/api/hotels/{id}", get(get_hotel))
}

async fn list_hotels(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>, AppError> {
    Ok(Json(state.catalog.hotels().await?))
}

async fn featured_hotels(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>, AppError> {
    Ok(Json(state.catalog.featured_hotels().await?))
}

async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Hotel>, AppError> {
    let id = parse_id(&id, "Invalid hotel ID")?;
    let hotel = state
        .catalog
        .hotel(id)
        .await?
        .ok_or_else(|| AppError::not_found("Hotel not found"))?;

    Ok(Json(hotel))
}
