use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use travelease_core::{CoreError, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Core(CoreError::ValidationError(errors)) => {
                (StatusCode::BAD_REQUEST, errors.to_string())
            }
            AppError::Core(err @ CoreError::MissingReference { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Core(CoreError::Conflict(msg)) => (StatusCode::CONFLICT, msg),
            AppError::Core(CoreError::InternalError(msg)) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Core(CoreError::ValidationError(errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_internal_errors_are_not_leaked() {
        let (status, body) = render(CoreError::InternalError("lock poisoned at 0xdead".to_string()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let (status, body) = render(ValidationErrors::single("message", "Required").into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation error: Required at \"message\"");

        let (status, _) = render(AppError::not_found("Hotel not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = render(CoreError::Conflict("taken".to_string()).into()).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let missing = CoreError::MissingReference { kind: "hotel", id: 9 };
        let (status, body) = render(missing.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Referenced hotel 9 does not exist");
    }
}
