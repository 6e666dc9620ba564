//! Device domain — IMEI lookup, in-service updates, warehouse resets.

pub mod client;
pub mod wire;

pub use client::Devices;
pub use wire::{DeviceAck, DeviceRecord, DeviceResetRequest, DeviceUpdateRequest, WarehouseDisplay};
