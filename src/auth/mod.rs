//! Authentication — credentials, token scheme, login/logout.
//!
//! ## Security Model
//!
//! - The session token lives in a private field on the HTTP client and is
//!   NEVER exposed via public API — no `.token()` accessor.
//! - Every request attaches the token according to the client's
//!   [`TokenScheme`]: an `Authorization: Bearer` header by default, or an
//!   `access_token` query parameter for deployments that require it.
//! - `logout()` drops the stored token. Sessions are stateless on the
//!   backend, so there is no server-side state to clear.

pub mod client;

use serde::{Deserialize, Serialize};

/// How the session token is attached to authenticated requests.
///
/// Chosen once when the client is built and applied uniformly to every
/// request for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScheme {
    /// `Authorization: Bearer <token>` request header.
    Bearer,
    /// `access_token=<token>` query parameter, for deployments whose proxy
    /// strips the Authorization header.
    QueryParam,
}

impl Default for TokenScheme {
    fn default() -> Self {
        TokenScheme::Bearer
    }
}

/// Admin credentials for the password login endpoint.
///
/// The optional deployment API key is appended to the login URL as
/// `access_token=<key>`; it gates the auth endpoint itself, not the session.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub api_key: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Login request body sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
