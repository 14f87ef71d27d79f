use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use super::OutputConfig;
use crate::config::Config;

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

#[derive(Serialize)]
struct InitOutput {
    status: String,
    config: String,
}

pub async fn run(args: InitArgs, output: OutputConfig, config_path: Option<&Path>) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => Config::user_config_path().context("Failed to determine user directories")?,
    };

    if path.exists() && !args.force {
        if output.json {
            let json_output = InitOutput {
                status: "already_exists".to_string(),
                config: path.display().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&json_output)?);
            return Ok(());
        }
        bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save(&path)?;

    if output.json {
        let json_output = InitOutput {
            status: "created".to_string(),
            config: path.display().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else if !output.quiet {
        println!(
            "{} Wrote default config to {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
    }

    Ok(())
}
