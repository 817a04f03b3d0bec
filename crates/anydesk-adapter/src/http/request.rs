/*
[INPUT]:  Method, typed resource path, query parameters, optional JSON body, signer
[OUTPUT]: SignedRequest with path+query, headers and body ready for the transport
[POS]:    HTTP layer - request construction shared by every endpoint
[UPDATE]: When changing query encoding, path rules or default headers
*/

use std::fmt;

use chrono::Utc;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use url::form_urlencoded;

use crate::http::signature::RequestSigner;
use crate::http::{AnydeskError, Result};

/// Query key the service treats as a presence flag
const ONLINE_FLAG: &str = "online";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One component of a resource path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed resource name, emitted verbatim
    Name(&'static str),
    /// Numeric identifier such as a client id
    Id(u64),
    /// Free-form key such as a session id, percent-encoded
    Key(String),
}

impl From<&'static str> for Segment {
    fn from(name: &'static str) -> Self {
        Segment::Name(name)
    }
}

impl From<u64> for Segment {
    fn from(id: u64) -> Self {
        Segment::Id(id)
    }
}

impl Segment {
    /// Free-form key segment; empty and dot segments are rejected
    ///
    /// URL parsing collapses `.` and `..` segments.
    pub fn key(key: &str) -> Result<Self> {
        if matches!(key, "" | "." | "..") {
            return Err(AnydeskError::Config(format!(
                "invalid path segment: {key:?}"
            )));
        }
        Ok(Segment::Key(key.to_string()))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => f.write_str(name),
            Segment::Id(id) => write!(f, "{id}"),
            Segment::Key(key) => write!(f, "{}", utf8_percent_encode(key, SEGMENT)),
        }
    }
}

/// Ordered list of segments rendered as `/a/b/c`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<Segment>,
}

impl ResourcePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, segment: impl Into<Segment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn push_key(self, key: &str) -> Result<Self> {
        Ok(self.push(Segment::key(key)?))
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Query parameters in wire order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-encode in insertion order, then collapse `online=...` to `online`
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        cleanup_query(&serializer.finish())
    }
}

/// Rewrite every `online=<value>` pair of an encoded query to the bare `online` flag
pub fn cleanup_query(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((ONLINE_FLAG, _)) => ONLINE_FLAG,
            _ => pair,
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Transport-independent request carrying its Authorization header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: Method,
    /// Exactly what was signed, e.g. `/clients?online&order=desc`
    pub path_and_query: String,
    pub timestamp: i64,
    pub authorization: String,
    pub user_agent: String,
    pub body: Option<Vec<u8>>,
}

impl SignedRequest {
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| JSON_CONTENT_TYPE)
    }

    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, header_value(&self.authorization)?);
        headers.insert(USER_AGENT, header_value(&self.user_agent)?);
        if let Some(content_type) = self.content_type() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AnydeskError::Config(format!("invalid header value: {e}")))
}

/// Builder for one signed API call
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    signer: &'a RequestSigner,
    user_agent: &'a str,
    method: Method,
    path: ResourcePath,
    query: QueryParams,
    body: Option<Vec<u8>>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(
        signer: &'a RequestSigner,
        user_agent: &'a str,
        method: Method,
        path: ResourcePath,
    ) -> Self {
        Self {
            signer,
            user_agent,
            method,
            path,
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach a compact JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    pub fn path_and_query(&self) -> String {
        let path = self.path.to_string();
        let query = self.query.encode();
        if query.is_empty() {
            path
        } else {
            format!("{path}?{query}")
        }
    }

    /// Sign with the current Unix time
    pub fn sign(self) -> SignedRequest {
        self.sign_at(Utc::now().timestamp())
    }

    /// Sign with an explicit Unix timestamp
    pub fn sign_at(self, timestamp: i64) -> SignedRequest {
        let path_and_query = self.path_and_query();
        let body = self.body.as_deref().unwrap_or_default();
        let authorization =
            self.signer
                .authorization(self.method.as_str(), &path_and_query, timestamp, body);

        SignedRequest {
            method: self.method,
            path_and_query,
            timestamp,
            authorization,
            user_agent: self.user_agent.to_string(),
            body: self.body,
        }
    }
}
