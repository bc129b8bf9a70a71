//! Gateway error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use macrodata_core::CoreError;
use serde_json::json;
use thiserror::Error;

/// Request-scoped gateway failures. Every variant renders as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No catalog entry or route for the request.
    #[error("Endpoint not found")]
    NotFound,

    /// Network failure, timeout, non-2xx status or unparsable body from the upstream.
    #[error("API request failed: {0}")]
    UpstreamTransport(String),

    /// Anything else.
    #[error("An error occurred: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn upstream(detail: impl Into<String>) -> Self {
        Self::UpstreamTransport(detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UpstreamTransport(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for GatewayError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownIndicator(_) => Self::NotFound,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound => tracing::debug!("endpoint not found"),
            Self::UpstreamTransport(detail) => tracing::warn!(%detail, "upstream request failed"),
            Self::Internal(detail) => tracing::error!(%detail, "gateway internal error"),
        }
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
