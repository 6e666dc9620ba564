//! Devices sub-client — IMEI lookup and provisioning updates.

use crate::client::FleetrClient;
use crate::domain::device::wire::{
    DeviceAck, DeviceRecord, DeviceResetRequest, DeviceUpdateRequest,
};
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::{EntityId, Imei};

/// Sub-client for device operations.
pub struct Devices<'a> {
    pub(crate) client: &'a FleetrClient,
}

impl<'a> Devices<'a> {
    /// Look up a device by IMEI.
    ///
    /// `GET core/devices?filter={"imei":N}` with the filter URL-encoded. The
    /// backend answers with an array; the first match wins, and an empty
    /// array becomes [`SdkError::NotFound`].
    pub async fn find_by_imei(&self, imei: Imei) -> Result<DeviceRecord, SdkError> {
        let filter = serde_json::json!({ "imei": imei });
        let url = format!(
            "{}/core/devices?filter={}",
            self.client.http.base_url(),
            urlencoding::encode(&filter.to_string())
        );
        let matches: Vec<DeviceRecord> =
            self.client.http.get(&url, RetryPolicy::Standard).await?;
        matches.into_iter().next().ok_or(SdkError::NotFound {
            entity: "device",
            key: imei.to_string(),
        })
    }

    /// Place a device into service: lifecycle status, vehicle, driver and
    /// warehouse in one `PUT core/devices/{id}`.
    pub async fn update(
        &self,
        id: &EntityId,
        update: &DeviceUpdateRequest,
    ) -> Result<DeviceAck, SdkError> {
        let url = format!("{}/core/devices/{}", self.client.http.base_url(), id);
        self.client.http.put(&url, update, RetryPolicy::Standard).await
    }

    /// Pull a device from service and return it to a warehouse pool.
    pub async fn reset(
        &self,
        id: &EntityId,
        reset: &DeviceResetRequest,
    ) -> Result<DeviceAck, SdkError> {
        let url = format!("{}/core/devices/{}", self.client.http.base_url(), id);
        self.client.http.put(&url, reset, RetryPolicy::Standard).await
    }
}
