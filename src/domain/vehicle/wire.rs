//! Wire types for vehicle endpoints.

use serde::{Deserialize, Serialize};

use crate::shared::EntityId;

/// `POST core/vehicles` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateVehicleRequest {
    /// License plate.
    pub patent: String,
    pub year: i32,
    pub alias: String,
    pub active: bool,
    /// Driver the vehicle is assigned to.
    pub user: EntityId,
}

/// `PATCH core/vehicles/{id}` body used to rename or reassign a vehicle.
///
/// `user` is omitted from the payload when absent so an existing assignment
/// is left alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleUpdateRequest {
    pub patent: String,
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EntityId>,
    pub active: bool,
}

/// A vehicle as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: EntityId,
    #[serde(default)]
    pub patent: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub user: Option<EntityId>,
}

/// Acknowledgement returned by the vehicle update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleAck {
    pub id: EntityId,
}
