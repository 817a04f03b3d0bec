/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: List filters and typed mutation bodies
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{ClientSort, Direction, SessionSort, SortOrder};

/// Filters for `GET /clients`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientsQuery {
    /// When false only online clients are returned
    pub include_offline: bool,
    pub offset: u64,
    /// `<= 0` means unlimited and is not sent
    pub limit: i64,
    pub sort: Option<ClientSort>,
    pub order: SortOrder,
}

/// Filters for `GET /sessions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionsQuery {
    /// Restrict to sessions involving this client
    pub client_id: Option<u64>,
    pub direction: Direction,
    /// Lower bound, sent as `from`
    pub time_after: Option<DateTime<Utc>>,
    /// Upper bound, sent as `to`
    pub time_before: Option<DateTime<Utc>>,
    pub offset: u64,
    pub limit: i64,
    pub sort: Option<SessionSort>,
    pub order: SortOrder,
}

/// Body of `PATCH /clients/{cid}`
///
/// `alias` is always serialized; `null` erases the alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasUpdate {
    pub alias: Option<String>,
}

impl AliasUpdate {
    /// An empty alias erases the current one
    pub fn new(alias: &str) -> Self {
        Self {
            alias: non_empty(alias),
        }
    }
}

/// Body of `PATCH /sessions/{sid}`
///
/// `comment` is always serialized; `null` erases the comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUpdate {
    pub comment: Option<String>,
}

impl CommentUpdate {
    pub fn new(comment: &str) -> Self {
        Self {
            comment: non_empty(comment),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionActionKind {
    Close,
}

/// Body of `POST /sessions/{sid}/action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAction {
    pub action: SessionActionKind,
}

impl SessionAction {
    pub fn close() -> Self {
        Self {
            action: SessionActionKind::Close,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
