//! Purist CLI - command-line interface for JavaScript anti-pattern detection

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use clap::Parser;
use purist_core::{analyze, render_json, render_text};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "purist")]
#[command(about = "Static analysis tool that flags JavaScript anti-patterns")]
struct Cli {
    /// Path to a JavaScript file or directory
    path: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Normalize path to absolute
    let normalized_path = if cli.path.is_relative() {
        std::env::current_dir()?.join(&cli.path)
    } else {
        cli.path
    };

    // Validate path exists
    if !normalized_path.exists() {
        anyhow::bail!("Path does not exist: {}", normalized_path.display());
    }

    // Analyze
    let reports = analyze(&normalized_path)?;

    // Render output
    match cli.format {
        OutputFormat::Text => {
            if reports.is_empty() {
                println!("No results found for {}", normalized_path.display());
            } else {
                print!("{}", render_text(&reports));
            }
        }
        OutputFormat::Json => {
            println!("{}", render_json(&reports));
        }
    }

    Ok(())
}
