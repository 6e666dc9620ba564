//! Network URL constants for the Fleetr SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api01.fleetr.app/api/v1";
