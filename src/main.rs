use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod mcp;
mod search;
mod types;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP stream
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    cli.run().await
}
