use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::debug;
use travelease_core::search::{SearchParams, SearchRequest};
use travelease_shared::Hotel;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/search", get(search_hotels))
}

/// GET /api/search?query=&destination=&minPrice=&maxPrice=&facilities=
async fn search_hotels(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Hotel>>, AppError> {
    let Query(params) = params?;
    let req = SearchRequest::parse(params)?;

    let hotels = state.search.run(&req).await?;
    debug!("Search {:?} matched {} hotels", req, hotels.len());

    Ok(Json(hotels))
}
