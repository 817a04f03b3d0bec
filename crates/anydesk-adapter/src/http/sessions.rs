/*
[INPUT]:  Session ids, list filters, comments and close actions
[OUTPUT]: Session records, list envelopes and action envelopes
[POS]:    HTTP layer - session (connection) endpoints
[UPDATE]: When adding session endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::request::{QueryParams, ResourcePath};
use crate::http::{AnydeskClient, Result};
use crate::types::{
    CommentUpdate, Direction, GenericResult, Session, SessionAction, SessionList, SessionsQuery,
};

const SESSIONS: &str = "sessions";

impl AnydeskClient {
    /// List sessions of the license, or of a single client
    ///
    /// GET /sessions?cid={cid}&direction={dir}&from={after}&to={before}&offset=..&limit=..&sort=..&order=..
    pub async fn sessions(&self, query: &SessionsQuery) -> Result<SessionList> {
        let builder = self
            .request(Method::GET, ResourcePath::new().push(SESSIONS))
            .query(sessions_query(query));
        self.send_json(builder).await
    }

    /// GET /sessions/{sid}
    pub async fn session(&self, sid: &str) -> Result<Session> {
        let builder = self.request(Method::GET, session_path(sid)?);
        self.send_json(builder).await
    }

    /// Close an active session; closing is one-way
    ///
    /// POST /sessions/{sid}/action
    pub async fn session_close(&self, sid: &str) -> Result<GenericResult> {
        let builder = self
            .request(Method::POST, session_path(sid)?.push("action"))
            .json(&SessionAction::close())?;
        self.send_envelope(builder).await
    }

    /// Set the comment of a session; an empty comment erases it
    ///
    /// PATCH /sessions/{sid}
    pub async fn session_comment(&self, sid: &str, comment: &str) -> Result<GenericResult> {
        let builder = self
            .request(Method::PATCH, session_path(sid)?)
            .json(&CommentUpdate::new(comment))?;
        self.send_envelope(builder).await
    }
}

fn session_path(sid: &str) -> Result<ResourcePath> {
    ResourcePath::new().push(SESSIONS).push_key(sid)
}

pub(crate) fn sessions_query(query: &SessionsQuery) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("cid", query.client_id)
        .push_opt(
            "direction",
            (query.direction != Direction::Any).then_some(query.direction),
        )
        .push_opt("from", query.time_after.map(|t| t.timestamp()))
        .push_opt("to", query.time_before.map(|t| t.timestamp()))
        .push_opt("offset", (query.offset > 0).then_some(query.offset))
        .push_opt("limit", (query.limit > 0).then_some(query.limit))
        .push_opt("sort", query.sort)
        .push("order", query.order);
    params
}
