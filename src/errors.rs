// src/errors.rs
// DOCUMENTATION: Custom error types for upstream calls and export
// PURPOSE: Centralized error handling for entire application

use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every collaborator call returns one of these instead of panicking.
/// The pipeline logs them and continues with absent or partial data (soft-fail).
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("External API error {status}: {body}")]
    ExternalApiError { status: u16, body: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Upstream status {status}: {message}")]
    UpstreamStatus { status: String, message: String },

    #[error("Export error: {0}")]
    ExportError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl PlacesError {
    /// HTTP status of the failed call, when the transport got that far
    pub fn http_status(&self) -> Option<u16> {
        match self {
            PlacesError::ExternalApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a non-OK Google `status` field to an error
    /// DOCUMENTATION: Shared by geocoding, nearby search and details responses
    pub fn from_upstream_status(status: &str, error_message: Option<String>) -> Self {
        match status {
            "OVER_QUERY_LIMIT" => PlacesError::RateLimitExceeded,
            other => PlacesError::UpstreamStatus {
                status: other.to_string(),
                message: error_message.unwrap_or_else(|| "Unknown error".to_string()),
            },
        }
    }
}
