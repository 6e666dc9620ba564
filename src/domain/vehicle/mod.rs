//! Vehicle domain — creation and in-place field updates.

pub mod client;
pub mod wire;

pub use client::Vehicles;
pub use wire::{CreateVehicleRequest, VehicleAck, VehicleRecord, VehicleUpdateRequest};
