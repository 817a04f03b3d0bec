/*
[INPUT]:  Credentials and HTTP configuration (base URL, timeouts, user agent)
[OUTPUT]: Configured client that signs, sends and decodes API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::auth::HmacSigner;
use crate::http::request::{RequestBuilder, ResourcePath};
use crate::http::signature::RequestSigner;
use crate::http::{AnydeskError, Result};
use crate::types::GenericResult;

/// Production endpoint
pub const DEFAULT_BASE_URL: &str = "https://v1.api.anydesk.com:8081";

pub const DEFAULT_USER_AGENT: &str = concat!("anydesk-adapter/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Pre-built transport; timeouts above are ignored when set
    pub http_client: Option<Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(5),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
        }
    }
}

/// License credentials; the API key never leaves the process
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub license_id: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, license_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            license_id: license_id.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AnydeskError::MissingApiKey);
        }
        if self.license_id.trim().is_empty() {
            return Err(AnydeskError::MissingLicenseId);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("license_id", &self.license_id)
            .finish()
    }
}

/// Main HTTP client for the AnyDesk REST API
///
/// Cheap to clone and safe to share between tasks: the credentials are
/// immutable and `reqwest::Client` pools connections internally. Dropping
/// a returned future cancels the request in flight.
#[derive(Debug, Clone)]
pub struct AnydeskClient {
    http_client: Client,
    base_url: String,
    user_agent: String,
    signer: RequestSigner,
}

impl AnydeskClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>, license_id: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(api_key, license_id), ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        credentials.validate()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let http_client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.timeout)
                .connect_timeout(config.connect_timeout)
                .build()
                .map_err(|e| AnydeskError::Config(format!("failed to build HTTP client: {e}")))?,
        };

        let hmac = HmacSigner::new(&credentials.api_key)
            .map_err(|e| AnydeskError::Config(format!("invalid API key: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
            user_agent: config.user_agent,
            signer: RequestSigner::new(credentials.license_id, hmac),
        })
    }

    pub fn license_id(&self) -> &str {
        self.signer.license_id()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Start building a signed request for a resource
    pub fn request(&self, method: Method, path: ResourcePath) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.signer, &self.user_agent, method, path)
    }

    /// Sign, send and decode one call
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder<'_>) -> Result<T> {
        let signed = builder.sign();
        let url = format!("{}{}", self.base_url, signed.path_and_query);

        let mut request = self
            .http_client
            .request(signed.method.clone(), &url)
            .headers(signed.headers()?);
        if let Some(body) = signed.body {
            request = request.body(body);
        }

        debug!(method = %signed.method, path = %signed.path_and_query, "sending request");
        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(
            method = %signed.method,
            path = %signed.path_and_query,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );
        trace!(len = bytes.len(), "response body");

        decode_response(status, &bytes)
    }

    /// Like `send_json` for action endpoints whose 2xx body may be empty
    pub async fn send_envelope(&self, builder: RequestBuilder<'_>) -> Result<GenericResult> {
        let envelope: Option<GenericResult> = self.send_json(builder).await?;
        Ok(envelope.unwrap_or_default())
    }
}

/// Success iff the status is in [200, 300)
pub fn is_success(status: StatusCode) -> bool {
    (200..300).contains(&status.as_u16())
}

/// Classify the status and decode the body
///
/// Failure statuses still decode the body best-effort into the error.
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> Result<T> {
    if !is_success(status) {
        let body = serde_json::from_slice(bytes).ok();
        return Err(AnydeskError::Api { status, body });
    }
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Client as ClientRecord, GenericResult};
    use rstest::rstest;

    #[test]
    fn test_missing_credentials() {
        assert!(matches!(
            AnydeskClient::new("", "lic1"),
            Err(AnydeskError::MissingApiKey)
        ));
        assert!(matches!(
            AnydeskClient::new("key1", ""),
            Err(AnydeskError::MissingLicenseId)
        ));
        // api key is checked first
        assert!(matches!(
            AnydeskClient::new("  ", ""),
            Err(AnydeskError::MissingApiKey)
        ));
    }

    #[test]
    fn test_defaults() {
        let client = AnydeskClient::new("key1", "lic1").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.license_id(), "lic1");
        assert!(client.user_agent().starts_with("anydesk-adapter/"));

        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_base_url_is_trimmed_and_validated() {
        let config = ClientConfig {
            base_url: "http://localhost:8081///".to_string(),
            ..ClientConfig::default()
        };
        let client = AnydeskClient::with_config(Credentials::new("k", "l"), config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8081");

        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        let err = AnydeskClient::with_config(Credentials::new("k", "l"), config).unwrap_err();
        assert!(matches!(err, AnydeskError::UrlParse(_)));
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let credentials = Credentials::new("super-secret", "lic1");
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("lic1"));

        let client = AnydeskClient::new("super-secret", "lic1").unwrap();
        assert!(!format!("{client:?}").contains("super-secret"));
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnydeskClient>();
    }

    #[rstest]
    #[case(200, true)]
    #[case(201, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(199, false)]
    #[case(300, false)]
    #[case(404, false)]
    #[case(500, false)]
    fn test_status_classification(#[case] code: u16, #[case] success: bool) {
        let status = StatusCode::from_u16(code).unwrap();
        assert_eq!(is_success(status), success);

        let body = br#"{"success": false, "error": "boom"}"#;
        let decoded = decode_response::<GenericResult>(status, body);
        if success {
            assert_eq!(decoded.unwrap().error.as_deref(), Some("boom"));
        } else {
            let err = decoded.unwrap_err();
            assert_eq!(err.status(), Some(status));
            assert_eq!(err.envelope().unwrap().error.as_deref(), Some("boom"));
        }
    }

    #[test]
    fn test_failure_with_non_json_body() {
        let err = decode_response::<GenericResult>(StatusCode::BAD_GATEWAY, b"<html>")
            .unwrap_err();
        assert!(matches!(
            err,
            AnydeskError::Api {
                status: StatusCode::BAD_GATEWAY,
                body: None
            }
        ));
    }

    #[test]
    fn test_malformed_success_body_is_serialization_error() {
        let err = decode_response::<ClientRecord>(StatusCode::OK, b"{not json").unwrap_err();
        assert!(matches!(err, AnydeskError::Serialization(_)));
    }

    #[test]
    fn test_empty_success_body() {
        let decoded: Option<GenericResult> = decode_response(StatusCode::NO_CONTENT, b"").unwrap();
        assert_eq!(decoded, None);

        let err = decode_response::<ClientRecord>(StatusCode::OK, b"  ").unwrap_err();
        assert!(matches!(err, AnydeskError::Serialization(_)));
    }

    #[test]
    fn test_partial_typed_result_on_failure() {
        let err = decode_response::<ClientRecord>(
            StatusCode::NOT_FOUND,
            br#"{"cid": 42, "alias": "ghost"}"#,
        )
        .unwrap_err();
        let partial: ClientRecord = err.partial().unwrap();
        assert_eq!(partial.cid, 42);
    }
}
