//! Error types for the zonescope CLI

use thiserror::Error;

/// Result type alias for zonescope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when the service rejects a scan without saying why
pub const GENERIC_SCAN_FAILURE: &str = "An error occurred during the scan";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A scan ended on the error screen
    #[error("{0}")]
    Scan(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Scan service errors.
///
/// Every variant is recoverable from the session's point of view: the form is
/// shown again and the user can resubmit.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. Carries the service's `error` field, or the generic
    /// fallback when the body had none.
    #[error("{0}")]
    ServerReported(String),

    /// The request never produced a response.
    #[error("Failed to connect to the server: {0}")]
    Transport(String),

    /// A 2xx response whose body is not a scan result.
    #[error("Failed to connect to the server: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Text shown in the error view.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether the service itself reported the failure.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, ApiError::ServerReported(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport(format!("Request timed out ({})", err))
        } else if err.is_connect() {
            ApiError::Transport(format!("Connection refused ({})", err))
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `zonescope init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Scan session misuse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("A scan is already in progress")]
    NotAcceptingInput,

    #[error("No scan has been submitted")]
    NothingSubmitted,
}
