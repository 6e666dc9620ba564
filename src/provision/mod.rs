//! Provisioning workflows — multi-step device lifecycle flows built on the
//! entity sub-clients, runnable one at a time or in batches.
//!
//! Each workflow takes a self-contained request payload keyed by IMEI. The
//! payloads derive `Deserialize` with field names matching the JSON batch
//! files operators already keep, so a work list can be loaded straight from
//! disk.

pub mod client;

pub use client::Provisioning;

use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, Imei};

/// One device-activation work item.
///
/// Drives [`Provisioning::provision`]: the device found by `imei` gets a
/// freshly created driver and vehicle, is pointed at `warehouse`, and is
/// attached to `tenant` along with the driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProvisionRequest {
    pub imei: Imei,
    pub tenant: EntityId,
    /// Lifecycle status written to the device, e.g. `"preactive"`.
    pub status: String,
    pub driver_name: String,
    pub driver_email: String,
    pub vehicle_patent: String,
    pub vehicle_year: i32,
    pub vehicle_alias: String,
    /// Warehouse the device is billed against while in service.
    pub warehouse: EntityId,
}

impl std::fmt::Display for ProvisionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.imei)
    }
}

/// One device-removal work item.
///
/// Drives [`Provisioning::deprovision`]: the device found by `imei` is
/// detached from its tenant (and its driver with it), then reset into the
/// `warehouse` pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeprovisionRequest {
    pub imei: Imei,
    /// Warehouse pool the device returns to.
    pub warehouse: EntityId,
    /// Human-readable warehouse name shown in the backend UI.
    pub warehouse_label: String,
    /// Tags written onto the reset device, e.g. billing tier markers.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl std::fmt::Display for DeprovisionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.imei)
    }
}

/// One vehicle-rename work item.
///
/// Drives [`Provisioning::rename_vehicle`]: plate, alias and active flag of
/// the vehicle currently assigned to the device found by `imei`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleRenameRequest {
    pub imei: Imei,
    pub vehicle_patent: String,
    pub vehicle_alias: String,
    pub vehicle_active: bool,
}

impl std::fmt::Display for VehicleRenameRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.imei)
    }
}
