use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;
use threadline::errors::CompileError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid compiler configuration: {0}")]
    Compiler(#[from] threadline::errors::ConfigurationError),

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A compile failure as seen by HTTP clients
#[derive(Debug)]
pub struct ApiError(pub CompileError);

impl From<CompileError> for ApiError {
    fn from(err: CompileError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.0.is_configuration() {
            tracing::warn!("Rejected compile: {}", self.0);
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            tracing::error!("Compile failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
