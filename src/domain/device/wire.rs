//! Wire types for device endpoints.

use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, Imei};

/// A device as returned by `GET core/devices`.
///
/// Only the fields the provisioning flows read are typed. The hardware
/// passthrough fields (`serial`, `iccid`, firmware metadata and so on) are
/// kept as raw JSON values: the flows copy them back verbatim on reset and
/// never inspect them, and the backend is not consistent about their types.
/// Everything else the backend sends is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: EntityId,
    pub imei: Imei,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iccid: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<serde_json::Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_n: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setupkey: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub used: bool,
    #[serde(default)]
    pub force_vehicle: bool,
    /// Tenants the device is currently associated with. The deprovision flow
    /// detaches from the first one.
    #[serde(default)]
    pub tenants: Vec<EntityId>,
    #[serde(default)]
    pub vehicle: Option<EntityId>,
    #[serde(default)]
    pub user: Option<EntityId>,
}

/// `PUT core/devices/{id}` body used when a device is placed into service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceUpdateRequest {
    pub id: EntityId,
    /// Target lifecycle status, e.g. `"preactive"` or `"active"`.
    pub status: String,
    pub vehicle: EntityId,
    pub user: EntityId,
    pub warehouse: EntityId,
}

/// `PUT core/devices/{id}` body used when a device is pulled from service.
///
/// Hardware fields are carried over from the fetched record; every
/// assignment is cleared and the device is pointed back at a warehouse pool.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResetRequest {
    pub id: EntityId,
    pub imei: Imei,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iccid: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<serde_json::Value>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<serde_json::Value>,
    pub alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_version: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_n: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setupkey: Option<serde_json::Value>,
    pub status: String,
    pub used: bool,
    pub force_vehicle: bool,
    /// Serialized as an explicit `null`, which is how the backend clears an
    /// assignment.
    pub vehicle: Option<EntityId>,
    pub user: Option<EntityId>,
    pub warehouse: EntityId,
    pub assignment_priority: u32,
    pub discard_bef: Option<serde_json::Value>,
    pub display: WarehouseDisplay,
    pub tags: Vec<String>,
}

/// Human-readable location shown in the backend UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarehouseDisplay {
    pub warehouse: String,
}

impl DeviceResetRequest {
    /// Build a reset body from a fetched device: hardware fields carried
    /// over, status back to `"preactive"`, vehicle and user cleared.
    pub fn from_record(
        record: &DeviceRecord,
        warehouse: &EntityId,
        warehouse_label: &str,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: record.id.clone(),
            imei: record.imei,
            serial: record.serial.clone(),
            iccid: record.iccid.clone(),
            provider: record.provider.clone(),
            device_type: record.device_type.clone(),
            alias: String::new(),
            firmware: record.firmware.clone(),
            config_version: record.config_version.clone(),
            model_n: record.model_n.clone(),
            setupkey: record.setupkey.clone(),
            status: "preactive".to_string(),
            used: false,
            force_vehicle: false,
            vehicle: None,
            user: None,
            warehouse: warehouse.clone(),
            assignment_priority: 0,
            discard_bef: None,
            display: WarehouseDisplay {
                warehouse: warehouse_label.to_string(),
            },
            tags,
        }
    }
}

/// Acknowledgement returned by the device update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceAck {
    pub id: EntityId,
}
