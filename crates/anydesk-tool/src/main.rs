/*
[INPUT]:  CLI arguments
[OUTPUT]: Command result on stdout, errors on stderr, process exit code
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or exit handling
*/

use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use anydesk_tool::{Cli, run};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let message = err.to_string();
            eprint!("Error: {}", message.strip_prefix("error: ").unwrap_or(&message));
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_tracing(&args.log_level) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
