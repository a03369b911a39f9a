use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_cli::{Cli, Config, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so they never interleave with prompts
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    if config.categories.is_empty() {
        tracing::warn!("no categories configured; task entries cannot be recorded");
    }

    let today = Local::now().date_naive();
    let mut session = Session::new(config, today, io::stdin().lock(), io::stdout().lock());
    session.run().context("interactive session failed")?;

    Ok(())
}
