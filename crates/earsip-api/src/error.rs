//! Error types for E-ARSIP API calls.

use std::io;

use reqwest::StatusCode;
use serde::Deserialize;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// API client error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error (reading an attachment from disk).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The server rejected the session (401/403).
    #[error("Not authorized ({status})")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
        /// Message from the server, if any.
        message: Option<String>,
    },

    /// Any other non-success response.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the server, or the status reason.
        message: String,
        /// Whether `message` came from the response body.
        from_server: bool,
    },

    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    /// Builds an error from a failed response status and its body message.
    #[must_use]
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Self::Unauthorized {
                status: status.as_u16(),
                message,
            };
        }

        match message {
            Some(message) => Self::Api {
                status: status.as_u16(),
                message,
                from_server: true,
            },
            None => Self::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
                from_server: false,
            },
        }
    }

    /// Returns the message supplied by the server, if there was one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. } => message.as_deref(),
            Self::Api {
                message,
                from_server: true,
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Text to show the user: the server's message, or `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// Returns true if the server rejected the session.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns the HTTP status for server-side failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body returned by the service on failure.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Extracts `message` (or `error`) from a failed response body.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}
