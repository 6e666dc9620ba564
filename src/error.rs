//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No {entity} found for {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
///
/// All three variants are transient from the retry loop's point of view: a
/// request is retried whether it failed in transport, timed out, or came back
/// with a non-success status. Reading the response body belongs to the
/// attempt, so a 2xx cut off mid-body counts as a failed attempt too.
/// Whatever the final attempt produced is returned to the caller unchanged.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Timed out: {url}")]
    Timeout { url: String },
}

impl HttpError {
    /// Numeric status code, if this error came from a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    LoginFailed(String),
}
