/*
[INPUT]:  Parsed subcommand and a configured AnyDesk client
[OUTPUT]: Text to print on stdout
[POS]:    Command layer - dispatch and rendering
[UPDATE]: When adding subcommands or changing output format
*/

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use anydesk_adapter::AnydeskClient;

use crate::cli::{ClientCommand, Command, SessionCommand};

/// Printed after a successful mutation
pub const OK: &str = "OK!";

pub async fn execute(client: &AnydeskClient, command: &Command) -> Result<String> {
    debug!(?command, "executing command");
    match command {
        Command::Authtest => {
            let result = client.auth_test().await.context("authentication test")?;
            Ok(result.result.unwrap_or_else(|| OK.to_string()))
        }
        Command::Sysinfo => render(&client.sys_info().await.context("system info")?),
        Command::Client(command) => execute_client(client, command).await,
        Command::Session(command) => execute_session(client, command).await,
    }
}

async fn execute_client(client: &AnydeskClient, command: &ClientCommand) -> Result<String> {
    match command {
        ClientCommand::Get { id } => {
            render(&client.client(*id).await.with_context(|| format!("client {id}"))?)
        }
        ClientCommand::List(args) => {
            render(&client.clients(&args.to_query()).await.context("list clients")?)
        }
        ClientCommand::Alias { id, alias } => {
            client
                .client_alias(*id, alias)
                .await
                .with_context(|| format!("set alias of client {id}"))?;
            Ok(OK.to_string())
        }
    }
}

async fn execute_session(client: &AnydeskClient, command: &SessionCommand) -> Result<String> {
    match command {
        SessionCommand::Get { id } => {
            render(&client.session(id).await.with_context(|| format!("session {id}"))?)
        }
        SessionCommand::List(args) => {
            let query = args.to_query()?;
            render(&client.sessions(&query).await.context("list sessions")?)
        }
        SessionCommand::Close { id } => {
            client
                .session_close(id)
                .await
                .with_context(|| format!("close session {id}"))?;
            Ok(OK.to_string())
        }
        SessionCommand::Comment { id, text } => {
            client
                .session_comment(id, text)
                .await
                .with_context(|| format!("comment on session {id}"))?;
            Ok(OK.to_string())
        }
    }
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("render output")
}
