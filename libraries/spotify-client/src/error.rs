//! Error types for the Spotify client.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// An error reported by the Web API itself (any non-2xx response).
///
/// Displays as `spotify: <message> [<status>]`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Deserialize)]
#[error("spotify: {message} [{status}]")]
pub struct ApiError {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

impl ApiError {
    /// Build an error from a failed response.
    ///
    /// Uses the `{"error": {"status", "message"}}` envelope when the body
    /// carries one, and the HTTP reason phrase otherwise.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown Status");

        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { error }) => Self {
                status: if error.status == 0 {
                    status.as_u16()
                } else {
                    error.status
                },
                message: if error.message.is_empty() {
                    reason.to_string()
                } else {
                    error.message
                },
            },
            Err(_) => Self {
                status: status.as_u16(),
                message: reason.to_string(),
            },
        }
    }
}

/// Errors that can occur when talking to the Spotify Web API.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success response could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed `added_at` timestamp
    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// IO error while reading an upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpotifyError {
    /// The API status code, if this error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }
}

/// Result type for Spotify client operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
