//! # Fleetr SDK
//!
//! A Rust SDK for the Fleetr fleet-management REST API, built for the batch
//! provisioning jobs that move tracking devices in and out of service.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, error taxonomy, URL constants
//! 2. **HTTP** — `FleetrHttp` with retrying verb helpers and token attachment
//! 3. **Auth** — Credential login, session token scheme
//! 4. **Domain** — Entity sub-clients: devices, users, vehicles, tenants
//! 5. **Workflows** — Batch execution + multi-step provisioning flows
//! 6. **High-Level Client** — `FleetrClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fleetr_sdk::prelude::*;
//!
//! let client = FleetrClient::builder()
//!     .batch(BatchConfig::new(4))
//!     .build()?;
//!
//! client.auth().login(&Credentials::new(email, password)).await?;
//!
//! let report = client.provisioning().provision_batch(payloads).await?;
//! for failure in report.failures() {
//!     eprintln!("{}: {:?}", failure.key, failure.result);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, token scheme, login/logout.
pub mod auth;

// ── Layer 4: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

// ── Layer 5: Workflows ───────────────────────────────────────────────────────

/// Bounded-concurrency batch execution.
pub mod batch;

/// Multi-step provisioning workflows and their batch drivers.
pub mod provision;

// ── Layer 6: High-Level Client ───────────────────────────────────────────────

/// `FleetrClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{EntityId, Imei};

    // Domain types — devices
    pub use crate::domain::device::{
        DeviceAck, DeviceRecord, DeviceResetRequest, DeviceUpdateRequest, WarehouseDisplay,
    };

    // Domain types — users, vehicles, tenants
    pub use crate::domain::tenant::EntityKind;
    pub use crate::domain::user::{CreateUserRequest, UserRecord};
    pub use crate::domain::vehicle::{
        CreateVehicleRequest, VehicleAck, VehicleRecord, VehicleUpdateRequest,
    };

    // Workflows
    pub use crate::batch::{run_batches, BatchConfig, BatchReport, ItemOutcome};
    pub use crate::provision::{DeprovisionRequest, ProvisionRequest, VehicleRenameRequest};

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::{Credentials, TokenScheme};

    // HTTP client + sub-clients
    pub use crate::client::{
        AuthClient, DevicesClient, FleetrClient, FleetrClientBuilder, ProvisioningClient,
        TenantsClient, UsersClient, VehiclesClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
