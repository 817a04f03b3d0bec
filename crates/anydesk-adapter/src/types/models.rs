/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed client, session and system info records
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// An AnyDesk client registered under the license
///
/// Sessions embed a reduced form of this record, so every field
/// falls back to its default when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub cid: u64,
    pub alias: Option<String>,
    #[serde(rename = "client-version")]
    pub client_version: String,
    pub online: bool,
    /// Seconds online
    #[serde(rename = "online-time")]
    pub online_time: u64,
    #[serde(rename = "last-sessions")]
    pub last_sessions: Vec<Session>,
}

/// A recorded connection between two clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub sid: String,
    pub from: Client,
    pub to: Client,
    pub active: bool,
    /// Epoch seconds
    #[serde(rename = "start-time")]
    pub start_time: i64,
    /// Epoch seconds, 0 while the session is active
    #[serde(rename = "end-time")]
    pub end_time: i64,
    pub duration: u64,
    pub comment: Option<String>,
}

/// License metadata and client/session counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SysInfo {
    pub name: String,
    #[serde(rename = "api-ver")]
    pub api_ver: String,
    pub license: License,
    pub clients: Counters,
    pub sessions: Counters,
    pub standalone: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    pub name: String,
    /// Epoch seconds, negative for perpetual licenses
    pub expires: i64,
    #[serde(rename = "max-clients")]
    pub max_clients: i64,
    #[serde(rename = "max-sessions")]
    pub max_sessions: i64,
    #[serde(rename = "max-session-time")]
    pub max_session_time: i64,
    pub namespaces: Vec<Namespace>,
    #[serde(rename = "license-id")]
    pub license_id: String,
    #[serde(rename = "license-key")]
    pub license_key: String,
    #[serde(rename = "api-password")]
    pub api_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespace {
    pub name: String,
    pub size: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counters {
    pub total: u64,
    pub online: u64,
}
