/*
[INPUT]:  Method, path+query, timestamp, body bytes and HMAC signer
[OUTPUT]: Canonical request string and `AD` Authorization header value
[POS]:    HTTP layer - request signing for every API call
[UPDATE]: When changing canonical string layout or header format
*/

use crate::auth::{HmacSigner, body_hash};

/// Scheme prefix of the Authorization header
pub const AUTH_SCHEME: &str = "AD";

/// Signs requests for one license
#[derive(Debug, Clone)]
pub struct RequestSigner {
    license_id: String,
    signer: HmacSigner,
}

impl RequestSigner {
    /// Create a new request signer for the given license
    pub fn new(license_id: impl Into<String>, signer: HmacSigner) -> Self {
        Self {
            license_id: license_id.into(),
            signer,
        }
    }

    pub fn license_id(&self) -> &str {
        &self.license_id
    }

    /// Build the exact byte sequence that gets signed
    ///
    /// Format: "{method}\n{path_and_query}\n{timestamp}\n{base64(sha1(body))}"
    pub fn canonical_string(
        method: &str,
        path_and_query: &str,
        timestamp: i64,
        body: &[u8],
    ) -> String {
        format!(
            "{method}\n{path_and_query}\n{timestamp}\n{}",
            body_hash(body)
        )
    }

    /// Base64 HMAC-SHA1 token over the canonical string
    pub fn sign_request(
        &self,
        method: &str,
        path_and_query: &str,
        timestamp: i64,
        body: &[u8],
    ) -> String {
        let canonical = Self::canonical_string(method, path_and_query, timestamp, body);
        self.signer.token(canonical.as_bytes())
    }

    /// Full Authorization header value
    ///
    /// Format: "AD {license_id}:{timestamp}:{token}"
    pub fn authorization(
        &self,
        method: &str,
        path_and_query: &str,
        timestamp: i64,
        body: &[u8],
    ) -> String {
        let token = self.sign_request(method, path_and_query, timestamp, body);
        format!("{AUTH_SCHEME} {}:{timestamp}:{token}", self.license_id)
    }
}

/// Parsed form of an `AD` Authorization header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationHeader<'a> {
    pub license_id: &'a str,
    pub timestamp: i64,
    pub token: &'a str,
}

impl<'a> AuthorizationHeader<'a> {
    /// Split a header value into its parts; `None` if it is not an `AD` header
    pub fn parse(value: &'a str) -> Option<Self> {
        let rest = value.strip_prefix(AUTH_SCHEME)?.strip_prefix(' ')?;
        // the token is base64 and never contains ':', the license id might
        let (head, token) = rest.rsplit_once(':')?;
        let (license_id, timestamp) = head.rsplit_once(':')?;
        Some(Self {
            license_id,
            timestamp: timestamp.parse().ok()?,
            token,
        })
    }
}
