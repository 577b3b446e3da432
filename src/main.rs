//! `lint-server` binary: builds the engine once, then serves gRPC requests.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use js_linter::Linter;
use lint_rpc::{runtime, serve, Cli, ServerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG=lint_rpc=debug to log every report body
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lint_rpc=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(&cli).context("failed to load configuration")?;

    let linter = Linter::from_options(&config.engine).context("failed to initialize lint engine")?;
    // Reject an unusable default formatter before accepting connections
    linter
        .formatter(&config.formatter)
        .context("invalid default formatter")?;
    tracing::info!(
        envs = ?config.engine.envs,
        plugins = ?config.engine.plugins,
        rules = linter.rules().len(),
        "lint engine ready"
    );

    let runtime = runtime().context("failed to start the async runtime")?;
    runtime.block_on(serve(Arc::new(linter), &config))?;
    Ok(())
}
