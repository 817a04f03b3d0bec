/*
[INPUT]:  Error sources (configuration, HTTP transport, serialization, API status)
[OUTPUT]: Structured error type with best-effort decoded API bodies
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::types::GenericResult;

/// Main error type for the AnyDesk adapter
#[derive(Error, Debug)]
pub enum AnydeskError {
    #[error("missing API Key")]
    MissingApiKey,

    #[error("missing License ID")]
    MissingLicenseId,

    /// Configuration error (base URL, HTTP client, header values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport failure: DNS, connect, timeout, body read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Status outside [200, 300); `body` holds whatever JSON the server sent
    #[error("API error ({status}){}", api_detail(.body))]
    Api {
        status: StatusCode,
        body: Option<Value>,
    },
}

impl AnydeskError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AnydeskError::Api { status, .. } => Some(*status),
            AnydeskError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Best-effort generic envelope decoded from an API error body
    ///
    /// `success` is always false here, whatever the body claims.
    pub fn envelope(&self) -> Option<GenericResult> {
        let mut envelope: GenericResult = self.partial()?;
        envelope.success = false;
        Some(envelope)
    }

    /// Decode an API error body into the type the call would have returned
    pub fn partial<T: DeserializeOwned>(&self) -> Option<T> {
        match self {
            AnydeskError::Api {
                body: Some(body), ..
            } => serde_json::from_value(body.clone()).ok(),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    ///
    /// Bad keys and clock skew both surface this way.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AnydeskError::MissingApiKey
                | AnydeskError::MissingLicenseId
                | AnydeskError::Config(_)
                | AnydeskError::UrlParse(_)
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, AnydeskError::Http(_))
    }
}

fn api_detail(body: &Option<Value>) -> String {
    let Some(body) = body else {
        return String::new();
    };
    let field = |name: &str| body.get(name).and_then(Value::as_str);
    match (field("error"), field("code")) {
        (Some(error), Some(code)) => format!(": {error} [{code}]"),
        (Some(error), None) => format!(": {error}"),
        (None, Some(code)) => format!(": [{code}]"),
        (None, None) => String::new(),
    }
}

/// Result type alias for AnyDesk operations
pub type Result<T> = std::result::Result<T, AnydeskError>;
