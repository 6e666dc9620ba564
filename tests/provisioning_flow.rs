//! Integration tests for the provisioning workflows using wiremock.
//!
//! Each workflow is a multi-step flow over the entity endpoints; these tests
//! mock the whole chain and verify ordering, payloads and failure isolation:
//!
//! - provision: lookup → create driver → create vehicle → device update →
//!   tenant associations
//! - A missing device aborts provision before any entity is created
//! - deprovision: tenant detach (device, then driver) → warehouse reset
//! - rename_vehicle: PATCH on the assigned vehicle, NotFound without one
//! - Batch drivers refuse to run without a session token
//! - A failed item is reported without aborting its batch

use std::time::Duration;

use fleetr_sdk::prelude::*;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: creates a client pointed at the given wiremock server.
fn mock_client(server: &MockServer) -> FleetrClient {
    let retry = RetryConfig {
        base_delay: Duration::from_millis(10),
        ..RetryConfig::default()
    };
    FleetrClient::builder()
        .base_url(&server.uri())
        .retry(retry)
        .build()
        .unwrap()
}

/// Helper: client with a mocked login already performed.
async fn logged_in_client(server: &MockServer) -> FleetrClient {
    let client = mock_client(server);
    Mock::given(method("POST"))
        .and(path("auth/admin/local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "batch-session-token"
        })))
        .mount(server)
        .await;
    client
        .auth()
        .login(&Credentials::new("ops@example.com", "hunter2"))
        .await
        .unwrap();
    client
}

/// Helper: a provision payload matching [`mount_provision_chain`].
fn sample_provision() -> ProvisionRequest {
    ProvisionRequest {
        imei: Imei::new(865640067963162),
        tenant: EntityId::from("tenant-1"),
        status: "preactive".to_string(),
        driver_name: "Driver 32".to_string(),
        driver_email: "driver32@example.com".to_string(),
        vehicle_patent: "TRK-032".to_string(),
        vehicle_year: 2025,
        vehicle_alias: "Truck 32".to_string(),
        warehouse: EntityId::from("warehouse-1"),
    }
}

/// Helper: mounts the whole happy-path chain for [`sample_provision`], each
/// step expected exactly once.
async fn mount_provision_chain(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("core/devices"))
        .and(query_param("filter", r#"{"imei":865640067963162}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "device-1",
            "imei": 865640067963162u64
        }])))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("core/users"))
        .and(body_json(serde_json::json!({
            "name": "Driver 32",
            "email": "driver32@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "driver-1",
            "name": "Driver 32",
            "email": "driver32@example.com"
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("core/vehicles"))
        .and(body_json(serde_json::json!({
            "patent": "TRK-032",
            "year": 2025,
            "alias": "Truck 32",
            "active": true,
            "user": "driver-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "vehicle-1",
            "patent": "TRK-032"
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path("core/devices/device-1"))
        .and(body_json(serde_json::json!({
            "id": "device-1",
            "status": "preactive",
            "vehicle": "vehicle-1",
            "user": "driver-1",
            "warehouse": "warehouse-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "device-1"
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("core/tenants/tenant-1/devices"))
        .and(body_json(serde_json::json!({ "devices": ["device-1"] })))
        .respond_with(ResponseTemplate::new(200).set_body_string("1 device"))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("core/tenants/tenant-1/users"))
        .and(body_json(serde_json::json!({ "users": ["driver-1"] })))
        .respond_with(ResponseTemplate::new(200).set_body_string("1 user"))
        .expect(1)
        .mount(server)
        .await;
}

// ── provision ──────────────────────────────────────────────────────────

#[tokio::test]
async fn provision_walks_the_full_chain() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    mount_provision_chain(&server).await;

    client
        .provisioning()
        .provision(&sample_provision())
        .await
        .unwrap();
}

#[tokio::test]
async fn provision_missing_device_creates_nothing() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("core/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    // No driver may be created for a device that does not exist.
    Mock::given(method("POST"))
        .and(path("core/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "driver-1"
        })))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.provisioning().provision(&sample_provision()).await;

    match result {
        Err(SdkError::NotFound { entity, key }) => {
            assert_eq!(entity, "device");
            assert_eq!(key, "865640067963162");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

// ── deprovision ────────────────────────────────────────────────────────

#[tokio::test]
async fn deprovision_detaches_then_resets() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("core/devices"))
        .and(query_param("filter", r#"{"imei":866392060695420}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "device-7",
            "imei": 866392060695420u64,
            "serial": "FST-55001",
            "iccid": 8956303342299080000u64,
            "status": "active",
            "used": true,
            "forceVehicle": true,
            "tenants": ["tenant-9"],
            "vehicle": "vehicle-7",
            "user": "driver-7"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("core/tenants/tenant-9/devices/device-7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("core/tenants/tenant-9/users/driver-7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    // The reset body clears every assignment and carries the hardware
    // fields over from the fetched record.
    Mock::given(method("PUT"))
        .and(path("core/devices/device-7"))
        .and(body_partial_json(serde_json::json!({
            "status": "preactive",
            "used": false,
            "forceVehicle": false,
            "vehicle": null,
            "user": null,
            "warehouse": "warehouse-2",
            "assignmentPriority": 0,
            "serial": "FST-55001",
            "display": { "warehouse": "Fleetr USA" },
            "tags": ["fleetr"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "device-7"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = client
        .provisioning()
        .deprovision(&DeprovisionRequest {
            imei: Imei::new(866392060695420),
            warehouse: EntityId::from("warehouse-2"),
            warehouse_label: "Fleetr USA".to_string(),
            tags: vec!["fleetr".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(id.as_str(), "device-7");
}

#[tokio::test]
async fn deprovision_without_tenant_is_not_found() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("core/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "device-8",
            "imei": 866392060695420u64,
            "tenants": []
        }])))
        .mount(&server)
        .await;

    let result = client
        .provisioning()
        .deprovision(&DeprovisionRequest {
            imei: Imei::new(866392060695420),
            warehouse: EntityId::from("warehouse-2"),
            warehouse_label: "Fleetr USA".to_string(),
            tags: vec![],
        })
        .await;

    match result {
        Err(SdkError::NotFound { entity, key }) => {
            assert_eq!(entity, "tenant");
            assert_eq!(key, "866392060695420");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

// ── rename_vehicle ─────────────────────────────────────────────────────

#[tokio::test]
async fn rename_vehicle_patches_the_assigned_vehicle() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("core/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "device-5",
            "imei": 353380101405420u64,
            "vehicle": "vehicle-5",
            "user": "driver-5"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    // The current driver rides along so the assignment is preserved.
    Mock::given(method("PATCH"))
        .and(path("core/vehicles/vehicle-5"))
        .and(body_json(serde_json::json!({
            "patent": "March 234",
            "alias": "March 234",
            "user": "driver-5",
            "active": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "vehicle-5"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = client
        .provisioning()
        .rename_vehicle(&VehicleRenameRequest {
            imei: Imei::new(353380101405420),
            vehicle_patent: "March 234".to_string(),
            vehicle_alias: "March 234".to_string(),
            vehicle_active: true,
        })
        .await
        .unwrap();

    assert_eq!(id.as_str(), "vehicle-5");
}

#[tokio::test]
async fn rename_without_vehicle_is_not_found() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("core/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "device-6",
            "imei": 353380101405420u64
        }])))
        .mount(&server)
        .await;

    let result = client
        .provisioning()
        .rename_vehicle(&VehicleRenameRequest {
            imei: Imei::new(353380101405420),
            vehicle_patent: "March 234".to_string(),
            vehicle_alias: "March 234".to_string(),
            vehicle_active: true,
        })
        .await;

    match result {
        Err(SdkError::NotFound { entity, .. }) => assert_eq!(entity, "vehicle"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

// ── Batch drivers ──────────────────────────────────────────────────────

#[tokio::test]
async fn batch_drivers_require_a_session() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    // Nothing may be dispatched without a token.
    Mock::given(method("GET"))
        .and(path("core/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let result = client
        .provisioning()
        .provision_batch(vec![sample_provision()])
        .await;

    assert!(matches!(
        result,
        Err(SdkError::Auth(AuthError::NotAuthenticated))
    ));

    let result = client
        .provisioning()
        .rename_vehicles(vec![VehicleRenameRequest {
            imei: Imei::new(353380101405420),
            vehicle_patent: "March 234".to_string(),
            vehicle_alias: "March 234".to_string(),
            vehicle_active: true,
        }])
        .await;

    assert!(matches!(
        result,
        Err(SdkError::Auth(AuthError::NotAuthenticated))
    ));
}

#[tokio::test]
async fn empty_batch_is_rejected_before_dispatch() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    let result = client.provisioning().provision_batch(vec![]).await;
    assert!(matches!(result, Err(SdkError::Validation(_))));
}

#[tokio::test]
async fn provision_batch_isolates_failures() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    // One device exists and walks the full chain, the other is unknown.
    mount_provision_chain(&server).await;
    Mock::given(method("GET"))
        .and(path("core/devices"))
        .and(query_param("filter", r#"{"imei":111111111111111}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let missing = ProvisionRequest {
        imei: Imei::new(111111111111111),
        ..sample_provision()
    };

    let report = client
        .provisioning()
        .provision_batch(vec![sample_provision(), missing])
        .await
        .unwrap();

    assert_eq!(report.total(), 2);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    assert!(!report.is_all_ok());

    // Outcomes keep the input order.
    assert_eq!(report.outcomes[0].key, "865640067963162");
    assert!(report.outcomes[0].result.is_ok());

    let failure = report.failures().next().unwrap();
    assert_eq!(failure.index, 1);
    assert_eq!(failure.key, "111111111111111");
    assert!(matches!(
        failure.result,
        Err(SdkError::NotFound { entity: "device", .. })
    ));
}

#[tokio::test]
async fn deprovision_batch_collects_reset_ids() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    // device-a has a driver to detach, device-b does not.
    Mock::given(method("GET"))
        .and(path("core/devices"))
        .and(query_param("filter", r#"{"imei":865640067963162}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "device-a",
            "imei": 865640067963162u64,
            "tenants": ["tenant-x"],
            "user": "driver-a"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("core/devices"))
        .and(query_param("filter", r#"{"imei":353380101405420}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "device-b",
            "imei": 353380101405420u64,
            "tenants": ["tenant-x"]
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("core/tenants/tenant-x/devices/device-a"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("core/tenants/tenant-x/users/driver-a"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("core/tenants/tenant-x/devices/device-b"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("core/devices/device-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "device-a"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("core/devices/device-b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "device-b"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let requests = vec![
        DeprovisionRequest {
            imei: Imei::new(865640067963162),
            warehouse: EntityId::from("warehouse-2"),
            warehouse_label: "Fleetr USA".to_string(),
            tags: vec![],
        },
        DeprovisionRequest {
            imei: Imei::new(353380101405420),
            warehouse: EntityId::from("warehouse-2"),
            warehouse_label: "Fleetr USA".to_string(),
            tags: vec![],
        },
    ];

    let report = client
        .provisioning()
        .deprovision_batch(requests)
        .await
        .unwrap();

    assert!(report.is_all_ok());
    let ids: Vec<&str> = report
        .outcomes
        .iter()
        .map(|o| o.result.as_ref().unwrap().as_str())
        .collect();
    assert_eq!(ids, ["device-a", "device-b"]);
}

#[tokio::test]
async fn rename_vehicles_batch_collects_vehicle_ids() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    // device-a carries a driver that must ride the PATCH, device-b does not.
    Mock::given(method("GET"))
        .and(path("core/devices"))
        .and(query_param("filter", r#"{"imei":865640067963162}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "device-a",
            "imei": 865640067963162u64,
            "vehicle": "vehicle-a",
            "user": "driver-a"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("core/devices"))
        .and(query_param("filter", r#"{"imei":353380101405420}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "device-b",
            "imei": 353380101405420u64,
            "vehicle": "vehicle-b"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("core/vehicles/vehicle-a"))
        .and(body_json(serde_json::json!({
            "patent": "VAN-101",
            "alias": "Van 101",
            "user": "driver-a",
            "active": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "vehicle-a"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // No driver on device-b, so the PATCH body carries no user key.
    Mock::given(method("PATCH"))
        .and(path("core/vehicles/vehicle-b"))
        .and(body_json(serde_json::json!({
            "patent": "VAN-102",
            "alias": "Van 102",
            "active": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "vehicle-b"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let requests = vec![
        VehicleRenameRequest {
            imei: Imei::new(865640067963162),
            vehicle_patent: "VAN-101".to_string(),
            vehicle_alias: "Van 101".to_string(),
            vehicle_active: true,
        },
        VehicleRenameRequest {
            imei: Imei::new(353380101405420),
            vehicle_patent: "VAN-102".to_string(),
            vehicle_alias: "Van 102".to_string(),
            vehicle_active: false,
        },
    ];

    let report = client
        .provisioning()
        .rename_vehicles(requests)
        .await
        .unwrap();

    assert!(report.is_all_ok());
    let ids: Vec<&str> = report
        .outcomes
        .iter()
        .map(|o| o.result.as_ref().unwrap().as_str())
        .collect();
    assert_eq!(ids, ["vehicle-a", "vehicle-b"]);
}
