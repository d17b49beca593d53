use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use healthbuddy_core::ChatError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Completion failed: {0}")]
    Gateway(#[from] ChatError),

    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Gateway(ref e) => {
                tracing::error!("Gateway error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "The AI service could not answer right now".to_string(),
                )
            }
            ApiError::Render(ref e) => {
                tracing::error!("Render error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
