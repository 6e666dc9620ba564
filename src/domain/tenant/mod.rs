//! Tenant domain — entity association management.

pub mod client;

pub use client::Tenants;

/// Entity families that can be attached to or detached from a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Device,
    User,
    Vehicle,
}

impl EntityKind {
    /// Plural path segment used by the association endpoints. Doubles as the
    /// key of the association request body.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Device => "devices",
            Self::User => "users",
            Self::Vehicle => "vehicles",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Device => "device",
            Self::User => "user",
            Self::Vehicle => "vehicle",
        };
        write!(f, "{}", s)
    }
}
