use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;

use super::OutputConfig;
use crate::config::Config;

#[derive(Args, Default)]
pub struct ServeArgs {
    /// Strip trailing carriage returns from lines (overrides config)
    #[arg(long)]
    normalize_line_endings: bool,
}

pub async fn run(args: ServeArgs, _output: OutputConfig, config_path: Option<&Path>) -> Result<()> {
    let mut config = Config::resolve(config_path).context("Failed to load config")?;
    if args.normalize_line_endings {
        config.search.normalize_line_endings = true;
    }

    crate::mcp::run_server(config).await
}
