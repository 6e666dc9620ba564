//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types and re-exports
//! - `wire.rs` — Raw serde structs matching backend requests/responses
//! - `client.rs` — Sub-client with HTTP methods
//!
//! All four entity families (devices, users, vehicles, tenants) live under
//! the backend's `core/` URL prefix and share the [`EntityId`] format.
//!
//! [`EntityId`]: crate::shared::EntityId

pub mod device;
pub mod tenant;
pub mod user;
pub mod vehicle;
