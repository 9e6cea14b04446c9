use travelease_shared::EntityId;
use crate::error::AppError;

/// Strict integer id from a path segment; `"12abc"` is rejected.
pub fn parse_id(raw: &str, invalid_msg: &str) -> Result<EntityId, AppError> {
    raw.trim()
        .parse::<EntityId>()
        .map_err(|_| AppError::BadRequest(invalid_msg.to_string()))
}
