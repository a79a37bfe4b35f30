use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Group resolution failed: {0}")]
    GroupResolution(String),

    #[error("Event fetch failed: {0}")]
    EventFetch(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::GroupResolution(_)
            | AppError::EventFetch(_)
            | AppError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::GroupResolution(msg) => {
                tracing::error!("Group resolution error: {}", msg);
                self.to_string()
            }
            AppError::EventFetch(msg) => {
                tracing::error!("Event fetch error: {}", msg);
                self.to_string()
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "Configuration error".to_string()
            }
            AppError::ExternalService(msg) => {
                tracing::error!("External service error: {}", msg);
                msg.clone()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "Internal error".to_string()
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
