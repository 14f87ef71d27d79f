use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::OutputConfig;
use crate::config::Config;
use crate::search::KeywordScanner;
use crate::types::SearchResult;

#[derive(Args)]
pub struct SearchArgs {
    /// The keyword to search for
    keyword: String,

    /// File to search in
    file: PathBuf,

    /// Match case exactly (overrides config)
    #[arg(long, short = 'c')]
    case_sensitive: bool,

    /// Ignore case (overrides config)
    #[arg(long, short = 'i', conflicts_with = "case_sensitive")]
    ignore_case: bool,

    /// Strip trailing carriage returns from lines (overrides config)
    #[arg(long)]
    normalize_line_endings: bool,
}

pub async fn run(args: SearchArgs, output: OutputConfig, config_path: Option<&Path>) -> Result<()> {
    let config = Config::resolve(config_path).context("Failed to load config")?;

    let case_sensitive = if args.case_sensitive {
        true
    } else if args.ignore_case {
        false
    } else {
        config.search.case_sensitive
    };
    let scanner = KeywordScanner::new()
        .with_normalized_line_endings(
            args.normalize_line_endings || config.search.normalize_line_endings,
        )
        .with_strict_utf8(config.search.strict_utf8);

    let result = scanner
        .search(&args.file, &args.keyword, case_sensitive)
        .await?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_human(&result, output.quiet);
    }

    Ok(())
}

fn print_human(result: &SearchResult, quiet: bool) {
    if result.matches.is_empty() {
        if !quiet {
            println!(
                "{} No matches for {} in {}",
                "!".yellow(),
                result.keyword.cyan(),
                result.filepath.display().to_string().dimmed()
            );
        }
        return;
    }

    if !quiet {
        println!(
            "{} {} matches for {} on {} lines in {}",
            "✓".green(),
            result.total_matches,
            result.keyword.cyan(),
            result.matches.len(),
            result.filepath.display().to_string().dimmed()
        );
        println!();
    }

    for line in &result.matches {
        let positions = line
            .match_positions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        // line:positions: content
        println!(
            "{}:{}: {}",
            line.line_number.to_string().green(),
            positions.dimmed(),
            line.line_content.trim_end_matches('\r')
        );
    }
}
