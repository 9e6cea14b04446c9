pub mod repository;
pub mod search;
pub mod validation;

use travelease_shared::EntityId;

pub use validation::{FieldError, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    ValidationError(#[from] ValidationErrors),
    #[error("Referenced {kind} {id} does not exist")]
    MissingReference { kind: &'static str, id: EntityId },
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
