//! High-level client — `FleetrClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::client::Auth;
use crate::auth::TokenScheme;
use crate::batch::BatchConfig;
use crate::domain::device::client::Devices;
use crate::domain::tenant::client::Tenants;
use crate::domain::user::client::Users;
use crate::domain::vehicle::client::Vehicles;
use crate::error::SdkError;
use crate::http::{FleetrHttp, RetryConfig};
use crate::provision::client::Provisioning;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::device::client::Devices as DevicesClient;
pub use crate::domain::tenant::client::Tenants as TenantsClient;
pub use crate::domain::user::client::Users as UsersClient;
pub use crate::domain::vehicle::client::Vehicles as VehiclesClient;
pub use crate::provision::client::Provisioning as ProvisioningClient;

/// The primary entry point for the Fleetr SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.devices()`, `client.tenants()`, `client.provisioning()`, etc.
pub struct FleetrClient {
    pub(crate) http: FleetrHttp,
    /// Batch settings used by the provisioning batch drivers.
    pub(crate) batch: BatchConfig,
}

impl FleetrClient {
    pub fn builder() -> FleetrClientBuilder {
        FleetrClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn devices(&self) -> Devices<'_> {
        Devices { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn vehicles(&self) -> Vehicles<'_> {
        Vehicles { client: self }
    }

    pub fn tenants(&self) -> Tenants<'_> {
        Tenants { client: self }
    }

    pub fn provisioning(&self) -> Provisioning<'_> {
        Provisioning { client: self }
    }

    /// Batch settings the provisioning batch drivers run with.
    pub fn batch_config(&self) -> &BatchConfig {
        &self.batch
    }
}

impl Clone for FleetrClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            batch: self.batch.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FleetrClientBuilder {
    base_url: String,
    token_scheme: TokenScheme,
    retry: RetryConfig,
    batch: BatchConfig,
}

impl Default for FleetrClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            token_scheme: TokenScheme::default(),
            retry: RetryConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl FleetrClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// How the session token rides on requests, fixed for the life of the
    /// client.
    pub fn token_scheme(mut self, scheme: TokenScheme) -> Self {
        self.token_scheme = scheme;
        self
    }

    /// Client-wide retry settings, used wherever a request runs with
    /// [`RetryPolicy::Standard`](crate::http::RetryPolicy::Standard).
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = config;
        self
    }

    /// Batch settings for the provisioning batch drivers.
    pub fn batch(mut self, config: BatchConfig) -> Self {
        self.batch = config;
        self
    }

    /// Build the client. Invalid retry or batch settings fail here, before
    /// any network activity.
    pub fn build(self) -> Result<FleetrClient, SdkError> {
        self.retry.validate()?;
        self.batch.validate()?;
        Ok(FleetrClient {
            http: FleetrHttp::new(&self.base_url, self.token_scheme, self.retry),
            batch: self.batch,
        })
    }
}
