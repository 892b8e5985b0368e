//! Integration tests for the HTTP API.
//!
//! These tests start an actual server on a random port, backed by an
//! in-memory contract reader, and make real HTTP requests with reqwest.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{address, Address};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::net::TcpListener;

use moda_api::{ApiServer, AppState};
use moda_core::{ConfigError, EvmAddress, NetworkError};
use moda_evm::testing::{profile_changed_log, MockReader};
use moda_evm::ClientConfig;

/// Timeout for HTTP requests in tests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const PROFILE: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
const CALLER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
const REGISTRY: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

/// Test harness that runs a server for the lifetime of the test.
struct TestHarness {
    client: Client,
    addr: SocketAddr,
    reader: Arc<MockReader>,
}

impl TestHarness {
    async fn new(reader: MockReader, registry: Option<Address>) -> Self {
        Self::with_from_block(reader, registry, None).await
    }

    async fn with_from_block(
        reader: MockReader,
        registry: Option<Address>,
        from_block: Option<u64>,
    ) -> Self {
        let reader = Arc::new(reader);
        let config = ClientConfig::new("mumbai").with_client(reader.clone());
        let state = AppState::new(config, registry.map(EvmAddress))
            .expect("valid config")
            .with_registry_from_block(from_block);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(ApiServer::serve(listener, state));

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build().unwrap();
        Self {
            client,
            addr,
            reader,
        }
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let resp = self
            .client
            .get(format!("http://{}{}", self.addr, path))
            .send()
            .await
            .expect("request should reach the server");
        let status = resp.status();
        let body = resp.json().await.expect("JSON body");
        (status, body)
    }
}

#[tokio::test]
async fn health_reports_chain() {
    let harness = TestHarness::new(MockReader::returning_nothing(), None).await;
    let (status, body) = harness.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["chain"], "mumbai");
}

#[tokio::test]
async fn name_found() {
    let harness = TestHarness::new(MockReader::returning_name("Alice"), None).await;
    let (status, body) = harness.get(&format!("/profiles/{PROFILE}/name")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["address"], PROFILE);
}

#[tokio::test]
async fn name_undefined_is_404() {
    let harness = TestHarness::new(MockReader::returning_nothing(), None).await;
    let (status, body) = harness.get(&format!("/profiles/{PROFILE}/name")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "profile name is undefined");
}

#[tokio::test]
async fn malformed_address_is_400_without_rpc() {
    let harness = TestHarness::new(MockReader::returning_name("Alice"), None).await;
    let (status, body) = harness.get("/profiles/0x1234/name").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "profile address is invalid");
    assert_eq!(harness.reader.calls(), 0);
}

#[tokio::test]
async fn network_failure_is_502() {
    let reader = MockReader::failing(NetworkError::Rpc("connection refused".into()));
    let harness = TestHarness::new(reader, None).await;
    let (status, body) = harness.get(&format!("/profiles/{PROFILE}/name")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn contract_profiles_lists_unique_contracts() {
    let caller: Address = CALLER.parse().unwrap();
    let a = address!("1111111111111111111111111111111111111111");
    let reader = MockReader::returning_nothing().with_logs(vec![
        profile_changed_log(a, caller),
        profile_changed_log(a, caller),
    ]);
    let harness = TestHarness::new(reader, Some(REGISTRY)).await;

    let lower = CALLER.to_ascii_lowercase();
    let (status, body) = harness.get(&format!("/contract-profiles/{lower}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([a.to_string()]));
}

#[tokio::test]
async fn contract_profiles_scan_from_registry_block() {
    let harness =
        TestHarness::with_from_block(MockReader::returning_nothing(), Some(REGISTRY), Some(4_200))
            .await;
    let (status, body) = harness.get(&format!("/contract-profiles/{CALLER}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
    assert_eq!(harness.reader.last_query().unwrap().from_block, Some(4_200));
}

#[tokio::test]
async fn contract_profiles_without_registry_is_503() {
    let harness = TestHarness::new(MockReader::returning_nothing(), None).await;
    let (status, _) = harness.get(&format!("/contract-profiles/{CALLER}")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(harness.reader.calls(), 0);
}

#[test]
fn state_rejects_unverifiable_config() {
    let err = AppState::new(ClientConfig::new("polygon"), None).unwrap_err();
    assert_eq!(err, ConfigError::MissingClient);
}
