/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed response envelopes with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{Client, Session};

/// Generic success/error wrapper returned by simple action endpoints
///
/// Real responses omit most of these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenericResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(rename = "request-time", skip_serializing_if = "Option::is_none")]
    pub request_time: Option<String>,
    #[serde(rename = "content-hash", skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(rename = "license-id", skip_serializing_if = "Option::is_none")]
    pub license_id: Option<String>,
}

/// Response of `GET /clients`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientList {
    pub count: u64,
    pub selected: u64,
    pub offset: u64,
    /// -1 when unlimited
    pub limit: i64,
    /// Echo of the online-only filter
    pub online: bool,
    pub list: Vec<Client>,
}

/// Response of `GET /sessions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionList {
    pub count: u64,
    pub selected: u64,
    pub offset: u64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    pub list: Vec<Session>,
}
