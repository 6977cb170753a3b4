//! Subcommand handlers against a mock metadata service.

use edgex_cli::addressable::{run_addressable, AddressableArgs, AddressableCommand};
use edgex_cli::device::{run_device, AdminStateArg, DeviceArgs, DeviceCommand, DeviceKey};
use edgex_cli::service::{run_service, ServiceArgs, ServiceCommand};
use edgex_cli::{run_ping, EXIT_NOT_FOUND};
use edgex_metadata_client::{MetadataClient, MetadataConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> MetadataClient {
    MetadataClient::new(MetadataConfig::local(mock_server.address().port())).unwrap()
}

#[tokio::test]
async fn ping_succeeds_with_exit_zero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&mock_server)
        .await;

    assert_eq!(run_ping(&test_client(&mock_server)).await.unwrap(), 0);
}

#[tokio::test]
async fn ping_failure_reports_signal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ping"))
        .respond_with(ResponseTemplate::new(503).set_body_string("starting"))
        .mount(&mock_server)
        .await;

    let err = run_ping(&test_client(&mock_server)).await.unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("code 503"));
    assert!(msg.contains("starting"));
}

#[tokio::test]
async fn service_get_missing_exits_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/deviceservice/name/device-gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let args = ServiceArgs {
        command: ServiceCommand::Get {
            name: "device-gone".into(),
        },
    };
    let code = run_service(&args, &test_client(&mock_server)).await.unwrap();
    assert_eq!(code, EXIT_NOT_FOUND);
}

#[tokio::test]
async fn addressable_get_found_exits_zero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/addressable/name/pump-01-addr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "pump-01-addr",
            "protocol": "TCP",
            "port": 502
        })))
        .mount(&mock_server)
        .await;

    let args = AddressableArgs {
        command: AddressableCommand::Get {
            name: "pump-01-addr".into(),
        },
    };
    let code = run_addressable(&args, &test_client(&mock_server)).await.unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn device_get_missing_is_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/device/name/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Device not found"))
        .mount(&mock_server)
        .await;

    let args = DeviceArgs {
        command: DeviceCommand::Get(DeviceKey {
            name: Some("ghost".into()),
            id: None,
        }),
    };
    let err = run_device(&args, &test_client(&mock_server)).await.unwrap_err();
    assert!(format!("{err:#}").contains("code 404"));
}

#[tokio::test]
async fn device_admin_puts_state() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/device/5c1a2b/adminstate/UNLOCKED"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let args = DeviceArgs {
        command: DeviceCommand::Admin {
            id: "5c1a2b".into(),
            state: AdminStateArg::Unlocked,
        },
    };
    assert_eq!(run_device(&args, &test_client(&mock_server)).await.unwrap(), 0);
}
