//! Error types for the TickTick API client.

use thiserror::Error;

/// Errors reported by the TickTick service itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP-level error with status code.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    /// Authentication failure (expired session, wrong password).
    #[error("Auth error: {message}")]
    Auth { message: String },
    /// Rate limit exceeded.
    #[error("Rate limited{}", retry_after.map(|s| format!(", retry after {s} seconds")).unwrap_or_default())]
    RateLimit { retry_after: Option<u64> },
    /// Resource not found.
    #[error("{resource} not found")]
    NotFound { resource: String },
    /// Request rejected by server-side validation.
    #[error("Validation error: {message}")]
    Validation { message: String },
    /// Network/connection error.
    #[error("Network error: {message}")]
    Network { message: String },
}

impl ApiError {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Network { .. } => 3,
            ApiError::RateLimit { .. } => 4,
            _ => 2,
        }
    }
}

/// Top-level error for every client operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure from reqwest.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body was not the JSON we expected.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot response carried no usable inbox identifier.
    #[error("inbox ID is missing or invalid in response")]
    MissingInboxId,
}

impl Error {
    /// Returns true when the session cookie was rejected and a new login is needed.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Api(ApiError::Auth { .. }))
    }

    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(api) => api.exit_code(),
            Error::Http(e) if e.is_connect() || e.is_timeout() => 3,
            _ => 2,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
