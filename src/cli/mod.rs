mod init;
mod search;
mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keyword-search")]
#[command(about = "Search a file for a keyword, as a CLI or an MCP tool server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Configuration file (defaults to the per-user config.toml)
    #[arg(long, global = true, env = "KEYWORD_SEARCH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server on stdio (default)
    Serve(serve::ServeArgs),

    /// Search a file for a keyword and print the matches
    Search(search::SearchArgs),

    /// Write a default configuration file
    Init(init::InitArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let output = OutputConfig {
            json: self.json,
            quiet: self.quiet,
        };
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Serve(args)) => serve::run(args, output, config_path).await,
            Some(Commands::Search(args)) => search::run(args, output, config_path).await,
            Some(Commands::Init(args)) => init::run(args, output, config_path).await,
            None => serve::run(serve::ServeArgs::default(), output, config_path).await,
        }
    }
}

/// Output configuration passed to all commands
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
}
