/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for anydesk-adapter tests

use anydesk_adapter::http::AuthorizationHeader;
use anydesk_adapter::{AnydeskClient, ClientConfig, Credentials, HmacSigner, RequestSigner};
use wiremock::{Match, MockServer, Request};

pub const API_KEY: &str = "key1";
pub const LICENSE_ID: &str = "lic1";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the test credentials
pub fn test_client(server: &MockServer) -> AnydeskClient {
    client_with_key(server, API_KEY)
}

#[allow(dead_code)]
pub fn client_with_key(server: &MockServer, api_key: &str) -> AnydeskClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    AnydeskClient::with_config(Credentials::new(api_key, LICENSE_ID), config)
        .expect("client init")
}

/// Path plus query exactly as received
#[allow(dead_code)]
pub fn path_and_query(request: &Request) -> String {
    match request.url.query() {
        Some(query) => format!("{}?{}", request.url.path(), query),
        None => request.url.path().to_string(),
    }
}

/// Matches only requests whose `AD` header verifies against the test key,
/// the way the server checks them
#[allow(dead_code)]
pub struct ValidSignature {
    signer: RequestSigner,
}

#[allow(dead_code)]
impl ValidSignature {
    pub fn new() -> Self {
        Self {
            signer: RequestSigner::new(LICENSE_ID, HmacSigner::new(API_KEY).expect("hmac key")),
        }
    }
}

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        let Some(value) = request
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
        else {
            return false;
        };
        let Some(header) = AuthorizationHeader::parse(value) else {
            return false;
        };
        let expected = self.signer.authorization(
            request.method.as_str(),
            &path_and_query(request),
            header.timestamp,
            &request.body,
        );
        header.license_id == LICENSE_ID && expected == value
    }
}
