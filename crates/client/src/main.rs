//! `lint-client` binary: sends workspace files to a lint-rpc server and
//! prints what it finds.

mod config;
mod error;
mod lint;
mod output;
mod report;
mod watch;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, ClientConfig};
use crate::lint::LintClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lint_client=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::load(&cli)?;

    output::print_banner(&format!("Connecting to lint server [ {} ] ...", config.server_url));
    let mut client = LintClient::connect(&config.server_url).await?;
    output::print_banner("Successfully connected to the lint server");

    if config.report {
        let linted = report::run(&mut client, &config.workspace)
            .await
            .with_context(|| format!("failed to lint {}", config.workspace.display()))?;
        output::print_banner(&format!("Linted {linted} files, results appended to {}", report::REPORT_FILE));
        return Ok(());
    }

    output::print_banner(&format!("Watching {} for changes", config.workspace.display()));
    tokio::select! {
        result = watch::run(&mut client, &config.workspace) => result?,
        _ = tokio::signal::ctrl_c() => {}
    }
    Ok(())
}
