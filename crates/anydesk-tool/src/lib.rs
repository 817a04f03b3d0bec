/*
[INPUT]:  Public API exports for the anydesktool crate
[OUTPUT]: Module declarations, client construction and command entry point
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod commands;

use std::time::Duration;

use anyhow::{Context, Result};
use anydesk_adapter::{AnydeskClient, ClientConfig, Credentials};

pub use cli::{Cli, Command};

/// Build the API client from the global flags
pub fn build_client(cli: &Cli) -> Result<AnydeskClient> {
    let config = ClientConfig {
        base_url: cli.base_url.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
        ..ClientConfig::default()
    };
    AnydeskClient::with_config(
        Credentials::new(cli.api_key.clone(), cli.license_id.clone()),
        config,
    )
    .context("create AnyDesk client")
}

/// Run one invocation and return what should be printed
pub async fn run(cli: &Cli) -> Result<String> {
    let client = build_client(cli)?;
    commands::execute(&client, &cli.command).await
}
