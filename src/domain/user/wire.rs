//! Wire types for user endpoints.

use serde::{Deserialize, Serialize};

use crate::shared::EntityId;

/// `POST core/users` body. The backend fills every other profile field with
/// tenant defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// A user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: EntityId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
