//! Low-level HTTP client — `FleetrHttp`.
//!
//! Generic verb helpers with retry and session-token attachment. Returns wire
//! types; endpoint URLs and domain conversions live in the Layer 4 sub-clients.

use crate::auth::TokenScheme;
use crate::error::{HttpError, SdkError};
use crate::http::retry::{RetryConfig, RetryPolicy};

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Fleetr REST API.
pub struct FleetrHttp {
    base_url: String,
    client: Client,
    scheme: TokenScheme,
    default_retry: RetryConfig,
    /// Session token. NEVER exposed publicly.
    token: Arc<RwLock<Option<String>>>,
}

impl FleetrHttp {
    pub fn new(base_url: &str, scheme: TokenScheme, default_retry: RetryConfig) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            scheme,
            default_retry,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store the session token obtained from login.
    pub(crate) async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    /// Clear the session token.
    pub(crate) async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    /// Check whether a session token is set.
    pub(crate) async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    // ── Verb helpers ─────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, SdkError> {
        self.request_json(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, SdkError> {
        self.request_json(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, SdkError> {
        self.request_json(reqwest::Method::PUT, url, Some(body), retry)
            .await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, SdkError> {
        self.request_json(reqwest::Method::PATCH, url, Some(body), retry)
            .await
    }

    /// POST where any success status is enough. The association endpoints
    /// answer 2xx with a non-JSON body, which is read and discarded.
    pub async fn post_expect_ok<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<(), SdkError> {
        self.request_discard(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    /// DELETE where any success status is enough; the response body is read
    /// and discarded.
    pub async fn delete_expect_ok(&self, url: &str, retry: RetryPolicy) -> Result<(), SdkError> {
        self.request_discard(reqwest::Method::DELETE, url, None::<&()>, retry)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn request_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, SdkError> {
        self.request_with_retry(url, retry, |timeout| {
            self.do_request(&method, url, body, timeout)
        })
        .await
    }

    async fn request_discard<B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<(), SdkError> {
        self.request_with_retry(url, retry, |timeout| {
            self.do_request_discard(&method, url, body, timeout)
        })
        .await
    }

    /// Run one attempt operation through the retry loop.
    ///
    /// The resolved config is validated before the first attempt, so a
    /// zero-attempt config never reaches the wire. Every failure the
    /// operation reports is retryable: transport errors, per-attempt
    /// timeouts and non-success statuses all count as a failed attempt.
    /// Once the attempt budget is spent the error from the final attempt is
    /// returned unchanged.
    async fn request_with_retry<T, F, Fut>(
        &self,
        url: &str,
        retry: RetryPolicy,
        operation: F,
    ) -> Result<T, SdkError>
    where
        F: Fn(Option<Duration>) -> Fut,
        Fut: Future<Output = Result<T, HttpError>>,
    {
        let config = match &retry {
            RetryPolicy::None => return Ok(operation(None).await?),
            RetryPolicy::Standard => self.default_retry.clone(),
            RetryPolicy::Custom(c) => c.clone(),
        };
        config.validate()?;

        let mut attempt = 1;
        loop {
            match operation(Some(config.attempt_timeout)).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if attempt >= config.max_attempts {
                        return Err(e.into());
                    }
                    let delay = config.delay_after_attempt(attempt);
                    tracing::debug!(
                        attempt,
                        max = config.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One attempt: send, check the status, parse the JSON body.
    ///
    /// The body read belongs to the attempt, so a connection cut or a
    /// deadline overrun mid-body fails this attempt rather than the whole
    /// call.
    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
        timeout: Option<Duration>,
    ) -> Result<T, HttpError> {
        let resp = self.send_request(method, url, body, timeout).await?;
        resp.json::<T>().await.map_err(|e| transport_error(e, url))
    }

    /// One attempt for endpoints whose success body carries no JSON: the
    /// body is still drained as part of the attempt, then dropped.
    async fn do_request_discard<B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
        timeout: Option<Duration>,
    ) -> Result<(), HttpError> {
        let resp = self.send_request(method, url, body, timeout).await?;
        resp.bytes().await.map_err(|e| transport_error(e, url))?;
        Ok(())
    }

    async fn send_request<B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Response, HttpError> {
        let target = self.decorated_url(url).await;

        let mut req = self.client.request(method.clone(), &target);
        if let Some(t) = timeout {
            req = req.timeout(t);
        }

        if self.scheme == TokenScheme::Bearer {
            if let Some(token) = self.token.read().await.as_ref() {
                req = req.header("Authorization", format!("Bearer {}", token));
            }
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| transport_error(e, url))?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let body_text = resp.text().await.unwrap_or_default();
        Err(HttpError::Status {
            status: status.as_u16(),
            body: body_text,
        })
    }

    /// Append the session token as a query parameter when that scheme is
    /// active and a token is stored.
    async fn decorated_url(&self, url: &str) -> String {
        if self.scheme == TokenScheme::QueryParam {
            if let Some(token) = self.token.read().await.as_ref() {
                let sep = if url.contains('?') { '&' } else { '?' };
                return format!("{}{}access_token={}", url, sep, urlencoding::encode(token));
            }
        }
        url.to_string()
    }
}

/// Classify a transport failure, reporting the undecorated URL so the token
/// never reaches logs.
fn transport_error(e: reqwest::Error, url: &str) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout {
            url: url.to_string(),
        }
    } else {
        HttpError::Network(e)
    }
}

impl Clone for FleetrHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            scheme: self.scheme,
            default_retry: self.default_retry.clone(),
            token: self.token.clone(),
        }
    }
}
