/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Closed sets of sort keys, sort orders and session directions
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the API accepts new sort keys or filters
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort keys accepted by `GET /clients`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientSort {
    #[serde(rename = "cid")]
    ClientId,
    #[serde(rename = "alias")]
    Alias,
    #[serde(rename = "online")]
    Online,
}

impl ClientSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientSort::ClientId => "cid",
            ClientSort::Alias => "alias",
            ClientSort::Online => "online",
        }
    }
}

/// Sort keys accepted by `GET /sessions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionSort {
    #[serde(rename = "from.cid")]
    FromClientId,
    #[serde(rename = "to.cid")]
    ToClientId,
    #[serde(rename = "start-time")]
    StartTime,
    #[serde(rename = "end-time")]
    EndTime,
    #[serde(rename = "duration")]
    Duration,
}

impl SessionSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionSort::FromClientId => "from.cid",
            SessionSort::ToClientId => "to.cid",
            SessionSort::StartTime => "start-time",
            SessionSort::EndTime => "end-time",
            SessionSort::Duration => "duration",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Session direction relative to the filtered client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Both directions; never sent on the wire
    #[default]
    #[serde(rename = "")]
    Any,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Any => "",
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(ClientSort, SessionSort, SortOrder, Direction);
