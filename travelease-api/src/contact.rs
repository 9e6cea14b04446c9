use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use travelease_shared::EntityId;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ContactResponse {
    message: &'static str,
    id: EntityId,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}

/// POST /api/contact
async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let Json(payload) = payload?;
    let form = state.contact.submit(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message: "Contact form submitted successfully",
            id: form.id,
        }),
    ))
}
