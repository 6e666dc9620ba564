//! Provisioning sub-client — the device lifecycle workflows.

use crate::batch::{run_batches, BatchReport};
use crate::client::FleetrClient;
use crate::domain::device::wire::{DeviceResetRequest, DeviceUpdateRequest};
use crate::domain::tenant::EntityKind;
use crate::domain::user::wire::CreateUserRequest;
use crate::domain::vehicle::wire::{CreateVehicleRequest, VehicleUpdateRequest};
use crate::error::{AuthError, SdkError};
use crate::provision::{DeprovisionRequest, ProvisionRequest, VehicleRenameRequest};
use crate::shared::EntityId;

/// Sub-client for the multi-step provisioning workflows.
pub struct Provisioning<'a> {
    pub(crate) client: &'a FleetrClient,
}

impl<'a> Provisioning<'a> {
    /// Activate a device for a tenant.
    ///
    /// Looks the device up by IMEI, creates the driver and their vehicle,
    /// writes status/vehicle/driver/warehouse onto the device, then attaches
    /// both the device and the driver to the tenant. Steps run strictly in
    /// order; the first failure aborts the remainder.
    pub async fn provision(&self, request: &ProvisionRequest) -> Result<(), SdkError> {
        let device = self.client.devices().find_by_imei(request.imei).await?;

        let driver = self
            .client
            .users()
            .create(&CreateUserRequest {
                name: request.driver_name.clone(),
                email: request.driver_email.clone(),
            })
            .await?;

        let vehicle = self
            .client
            .vehicles()
            .create(&CreateVehicleRequest {
                patent: request.vehicle_patent.clone(),
                year: request.vehicle_year,
                alias: request.vehicle_alias.clone(),
                active: true,
                user: driver.id.clone(),
            })
            .await?;

        self.client
            .devices()
            .update(
                &device.id,
                &DeviceUpdateRequest {
                    id: device.id.clone(),
                    status: request.status.clone(),
                    vehicle: vehicle.id,
                    user: driver.id.clone(),
                    warehouse: request.warehouse.clone(),
                },
            )
            .await?;

        self.client
            .tenants()
            .associate(&request.tenant, EntityKind::Device, &device.id)
            .await?;
        self.client
            .tenants()
            .associate(&request.tenant, EntityKind::User, &driver.id)
            .await?;

        tracing::info!(imei = %request.imei, tenant = %request.tenant, "Device provisioned");
        Ok(())
    }

    /// Pull a device out of service and return it to a warehouse pool.
    ///
    /// Detaches the device from its first associated tenant, detaches the
    /// assigned driver when there is one, then resets the device record.
    /// Returns the reset device's id.
    pub async fn deprovision(&self, request: &DeprovisionRequest) -> Result<EntityId, SdkError> {
        let device = self.client.devices().find_by_imei(request.imei).await?;

        let tenant = device
            .tenants
            .first()
            .cloned()
            .ok_or(SdkError::NotFound {
                entity: "tenant",
                key: request.imei.to_string(),
            })?;

        self.client
            .tenants()
            .dissociate(&tenant, EntityKind::Device, &device.id)
            .await?;
        if let Some(user) = device.user.clone() {
            self.client
                .tenants()
                .dissociate(&tenant, EntityKind::User, &user)
                .await?;
        }

        let reset = DeviceResetRequest::from_record(
            &device,
            &request.warehouse,
            &request.warehouse_label,
            request.tags.clone(),
        );
        let ack = self.client.devices().reset(&device.id, &reset).await?;

        tracing::info!(device = %ack.id, imei = %request.imei, "Device returned to warehouse");
        Ok(ack.id)
    }

    /// Rename the vehicle assigned to a device.
    ///
    /// A device without a vehicle assignment fails with
    /// [`SdkError::NotFound`]. Returns the updated vehicle's id.
    pub async fn rename_vehicle(
        &self,
        request: &VehicleRenameRequest,
    ) -> Result<EntityId, SdkError> {
        let device = self.client.devices().find_by_imei(request.imei).await?;

        let vehicle = device.vehicle.clone().ok_or(SdkError::NotFound {
            entity: "vehicle",
            key: request.imei.to_string(),
        })?;

        let ack = self
            .client
            .vehicles()
            .update(
                &vehicle,
                &VehicleUpdateRequest {
                    patent: request.vehicle_patent.clone(),
                    alias: request.vehicle_alias.clone(),
                    user: device.user.clone(),
                    active: request.vehicle_active,
                },
            )
            .await?;
        Ok(ack.id)
    }

    // ── Batch drivers ────────────────────────────────────────────────────

    /// Run [`provision`](Self::provision) over a work list in groups.
    pub async fn provision_batch(
        &self,
        requests: Vec<ProvisionRequest>,
    ) -> Result<BatchReport<()>, SdkError> {
        self.require_token().await?;
        run_batches(requests, &self.client.batch, |request| async move {
            self.provision(&request).await
        })
        .await
    }

    /// Run [`deprovision`](Self::deprovision) over a work list in groups.
    pub async fn deprovision_batch(
        &self,
        requests: Vec<DeprovisionRequest>,
    ) -> Result<BatchReport<EntityId>, SdkError> {
        self.require_token().await?;
        run_batches(requests, &self.client.batch, |request| async move {
            self.deprovision(&request).await
        })
        .await
    }

    /// Run [`rename_vehicle`](Self::rename_vehicle) over a work list in
    /// groups.
    pub async fn rename_vehicles(
        &self,
        requests: Vec<VehicleRenameRequest>,
    ) -> Result<BatchReport<EntityId>, SdkError> {
        self.require_token().await?;
        run_batches(requests, &self.client.batch, |request| async move {
            self.rename_vehicle(&request).await
        })
        .await
    }

    /// The batch drivers check for a session token up front: without one
    /// every item would fail identically, so the run aborts before any item
    /// is dispatched.
    async fn require_token(&self) -> Result<(), SdkError> {
        if !self.client.http.has_token().await {
            return Err(AuthError::NotAuthenticated.into());
        }
        Ok(())
    }
}
