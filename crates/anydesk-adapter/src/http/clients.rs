/*
[INPUT]:  Client ids, list filters and alias updates
[OUTPUT]: Client records and list envelopes
[POS]:    HTTP layer - client (device) endpoints
[UPDATE]: When adding client endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::request::{QueryParams, ResourcePath};
use crate::http::{AnydeskClient, Result};
use crate::types::{AliasUpdate, Client, ClientList, ClientsQuery, GenericResult};

const CLIENTS: &str = "clients";

impl AnydeskClient {
    /// List clients under the license
    ///
    /// GET /clients?online&offset={offset}&limit={limit}&sort={sort}&order={order}
    pub async fn clients(&self, query: &ClientsQuery) -> Result<ClientList> {
        let builder = self
            .request(Method::GET, ResourcePath::new().push(CLIENTS))
            .query(clients_query(query));
        self.send_json(builder).await
    }

    /// GET /clients/{cid}
    pub async fn client(&self, cid: u64) -> Result<Client> {
        let builder = self.request(Method::GET, ResourcePath::new().push(CLIENTS).push(cid));
        self.send_json(builder).await
    }

    /// Set the alias of a client; an empty alias erases it
    ///
    /// PATCH /clients/{cid}
    pub async fn client_alias(&self, cid: u64, alias: &str) -> Result<GenericResult> {
        let builder = self
            .request(Method::PATCH, ResourcePath::new().push(CLIENTS).push(cid))
            .json(&AliasUpdate::new(alias))?;
        self.send_envelope(builder).await
    }
}

pub(crate) fn clients_query(query: &ClientsQuery) -> QueryParams {
    let mut params = QueryParams::new();
    if !query.include_offline {
        params.push("online", true);
    }
    params
        .push_opt("offset", (query.offset > 0).then_some(query.offset))
        .push_opt("limit", (query.limit > 0).then_some(query.limit))
        .push_opt("sort", query.sort)
        .push("order", query.order);
    params
}
