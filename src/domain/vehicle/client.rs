//! Vehicles sub-client — creation and field updates.

use crate::client::FleetrClient;
use crate::domain::vehicle::wire::{
    CreateVehicleRequest, VehicleAck, VehicleRecord, VehicleUpdateRequest,
};
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::EntityId;

/// Sub-client for vehicle operations.
pub struct Vehicles<'a> {
    pub(crate) client: &'a FleetrClient,
}

impl<'a> Vehicles<'a> {
    /// Create a vehicle assigned to a driver. `POST core/vehicles`.
    pub async fn create(&self, request: &CreateVehicleRequest) -> Result<VehicleRecord, SdkError> {
        let url = format!("{}/core/vehicles", self.client.http.base_url());
        self.client
            .http
            .post(&url, request, RetryPolicy::Standard)
            .await
    }

    /// Update plate, alias, driver or active flag in place.
    /// `PATCH core/vehicles/{id}`.
    pub async fn update(
        &self,
        id: &EntityId,
        update: &VehicleUpdateRequest,
    ) -> Result<VehicleAck, SdkError> {
        let url = format!("{}/core/vehicles/{}", self.client.http.base_url(), id);
        self.client
            .http
            .patch(&url, update, RetryPolicy::Standard)
            .await
    }
}
