//! Common error types for the gateway

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Classified failure of a single upstream call
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout or a broken body stream
    #[error("{source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-2xx status
    #[error("upstream returned '{status}' for url '{url}'")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Body was not JSON or not the expected top-level shape
    #[error("invalid response from '{url}': {reason}")]
    Decode { url: String, reason: String },
}

impl UpstreamError {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Transport { source, .. } if source.is_timeout() => "timeout",
            UpstreamError::Transport { .. } => "transport",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Decode { .. } => "decode",
        }
    }
}

/// Reason a health probe tick failed
#[derive(Error, Debug)]
pub enum ProbeFailure {
    /// Target answered, but not with 200
    #[error("Health check failed with status code {status}")]
    UnexpectedStatus { status: u16, excerpt: String },

    /// DNS failure, refused connection or timeout
    #[error("HTTP connection failed: {0}")]
    Connection(#[source] reqwest::Error),
}

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{action}: {source}")]
    Upstream {
        action: &'static str,
        #[source]
        source: UpstreamError,
    },

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn upstream(action: &'static str, source: UpstreamError) -> Self {
        AppError::Upstream { action, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            // Upstream failures never leak the upstream status
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
