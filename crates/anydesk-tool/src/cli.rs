/*
[INPUT]:  Command-line arguments
[OUTPUT]: Parsed global options, subcommands and list queries
[POS]:    CLI layer - argument parsing
[UPDATE]: When changing CLI flags or subcommands
*/

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

use anydesk_adapter::http::DEFAULT_BASE_URL;
use anydesk_adapter::{ClientSort, ClientsQuery, Direction, SessionSort, SessionsQuery, SortOrder};

#[derive(Parser)]
#[command(name = "anydesktool", version, about = "AnyDesk REST API tool")]
pub struct Cli {
    /// AnyDesk License ID
    #[arg(long = "license", value_name = "ID")]
    pub license_id: String,
    /// AnyDesk API Key
    #[arg(long = "apikey", value_name = "KEY")]
    pub api_key: String,
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS", default_value_t = 5)]
    pub timeout_secs: u64,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Authentication Test
    Authtest,
    /// AnyDesk System Info
    Sysinfo,
    /// Client Tools
    #[command(subcommand)]
    Client(ClientCommand),
    /// Session Tools
    #[command(subcommand)]
    Session(SessionCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Get Single Client
    Get {
        /// Client ID
        id: u64,
    },
    /// List Clients
    List(ClientListArgs),
    /// Set Client Alias; an empty alias removes it
    Alias {
        /// Client ID
        id: u64,
        /// New Alias
        alias: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Get Single Session
    Get {
        /// Session ID
        id: String,
    },
    /// List Sessions
    List(SessionListArgs),
    /// Close an Open Session
    Close {
        /// Session ID
        id: String,
    },
    /// Set Comment on Session; an empty comment removes it
    Comment {
        /// Session ID
        id: String,
        /// Comment Text
        text: String,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ClientListArgs {
    /// Max record count returned; <= 0 for all
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub limit: i64,
    /// Index of first item returned
    #[arg(long, default_value_t = 0)]
    pub offset: u64,
    /// Sort results by property name
    #[arg(long, value_enum)]
    pub sort: Option<ClientSortArg>,
    /// Sort direction
    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    pub order: OrderArg,
    /// Include offline clients in results
    #[arg(long = "includeoffline")]
    pub include_offline: bool,
}

impl ClientListArgs {
    pub fn to_query(&self) -> ClientsQuery {
        ClientsQuery {
            include_offline: self.include_offline,
            offset: self.offset,
            limit: self.limit,
            sort: self.sort.map(Into::into),
            order: self.order.into(),
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SessionListArgs {
    /// Client ID
    pub cid: Option<u64>,
    /// Max record count returned; <= 0 for all
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub limit: i64,
    /// Index of first item returned
    #[arg(long, default_value_t = 0)]
    pub offset: u64,
    /// Sort results by property name
    #[arg(long, value_enum)]
    pub sort: Option<SessionSortArg>,
    /// Sort direction
    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    pub order: OrderArg,
    /// Session connection direction
    #[arg(long, value_enum, default_value_t = DirectionArg::Inout)]
    pub direction: DirectionArg,
    /// Only sessions after this Unix time
    #[arg(long, value_name = "EPOCH")]
    pub after: Option<i64>,
    /// Only sessions before this Unix time
    #[arg(long, value_name = "EPOCH")]
    pub before: Option<i64>,
}

impl SessionListArgs {
    pub fn to_query(&self) -> Result<SessionsQuery> {
        Ok(SessionsQuery {
            client_id: self.cid.filter(|cid| *cid > 0),
            direction: self.direction.into(),
            time_after: self.after.map(epoch).transpose()?,
            time_before: self.before.map(epoch).transpose()?,
            offset: self.offset,
            limit: self.limit,
            sort: self.sort.map(Into::into),
            order: self.order.into(),
        })
    }
}

fn epoch(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).with_context(|| format!("timestamp out of range: {secs}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClientSortArg {
    #[value(name = "cid", alias = "id")]
    Cid,
    Alias,
    Online,
}

impl From<ClientSortArg> for ClientSort {
    fn from(arg: ClientSortArg) -> Self {
        match arg {
            ClientSortArg::Cid => ClientSort::ClientId,
            ClientSortArg::Alias => ClientSort::Alias,
            ClientSortArg::Online => ClientSort::Online,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SessionSortArg {
    #[value(name = "from.cid", alias = "from")]
    From,
    #[value(name = "to.cid", alias = "to")]
    To,
    #[value(name = "start-time", alias = "start")]
    Start,
    #[value(name = "end-time", alias = "end")]
    End,
    Duration,
}

impl From<SessionSortArg> for SessionSort {
    fn from(arg: SessionSortArg) -> Self {
        match arg {
            SessionSortArg::From => SessionSort::FromClientId,
            SessionSortArg::To => SessionSort::ToClientId,
            SessionSortArg::Start => SessionSort::StartTime,
            SessionSortArg::End => SessionSort::EndTime,
            SessionSortArg::Duration => SessionSort::Duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Inout,
    In,
    Out,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Inout => Direction::Any,
            DirectionArg::In => Direction::In,
            DirectionArg::Out => Direction::Out,
        }
    }
}
