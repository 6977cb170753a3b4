//! Liveness checks against `GET /api/v1/ping`.

use edgex_metadata_client::{ErrorKind, ErrorSignal, MetadataClient, MetadataConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(port: u16) -> MetadataClient {
    MetadataClient::new(MetadataConfig::local(port)).unwrap()
}

#[tokio::test]
async fn ping_true_on_2xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.address().port());
    assert!(client.ping().await);
}

#[tokio::test]
async fn ping_false_on_503() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ping"))
        .respond_with(ResponseTemplate::new(503).set_body_string("starting"))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.address().port());
    assert!(!client.ping().await);
    let err = client.check_liveness().await.unwrap_err();
    assert_eq!(err.signal().code, 503);
}

#[tokio::test]
async fn ping_false_when_service_is_down() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = test_client(port);
    assert!(!client.ping().await);
    let err = client.check_liveness().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.signal().code, ErrorSignal::REMOTE_SERVER_DOWN);
}
