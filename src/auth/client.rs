//! Auth sub-client — login, logout, session state.

use crate::auth::{Credentials, LoginRequest, LoginResponse};
use crate::client::FleetrClient;
use crate::error::{AuthError, SdkError};
use crate::http::RetryPolicy;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a FleetrClient,
}

impl<'a> Auth<'a> {
    /// Exchange admin credentials for a session token.
    ///
    /// `POST /auth/admin/local` with the email/password pair; when the
    /// credentials carry an API key it is appended to the URL as
    /// `access_token=<key>`. Any token from a previous login is dropped
    /// before the request, so only the API key ever accompanies a login.
    /// The returned token is stored on the HTTP client and attached to every
    /// subsequent request.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), SdkError> {
        self.client.http.clear_token().await;

        let mut url = format!("{}/auth/admin/local", self.client.http.base_url());
        if let Some(key) = &credentials.api_key {
            url = format!("{}?access_token={}", url, urlencoding::encode(key));
        }

        let request = LoginRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };

        let login_resp: LoginResponse = self
            .client
            .http
            .post(&url, &request, RetryPolicy::Standard)
            .await
            .map_err(|e| AuthError::LoginFailed(e.to_string()))?;

        self.client.http.set_token(Some(login_resp.token)).await;
        Ok(())
    }

    /// Drop the stored session token.
    pub async fn logout(&self) {
        self.client.http.clear_token().await;
    }

    /// Whether a session token is currently stored.
    ///
    /// Reflects local state only; the backend may still reject an expired
    /// token.
    pub async fn is_authenticated(&self) -> bool {
        self.client.http.has_token().await
    }
}
