//! One-shot onboarding mapper
//!
//! Maps a single onboarding input document to shader parameters without
//! starting the service.
//!
//! **Usage:**
//! ```bash
//! hueprint-map --input answers.json --pretty
//! echo '{"intent":"Focus","seed":42}' | hueprint-map
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hueprint_ps::oneshot::{map_json, read_input};
use tracing::debug;

/// Map onboarding answers (JSON) to shader parameters (JSON)
#[derive(Parser, Debug)]
#[command(name = "hueprint-map")]
#[command(about = "Map onboarding answers to shader parameters")]
#[command(version)]
struct Args {
    /// Input JSON file (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let source = match &args.input {
        Some(path) => path.display().to_string(),
        None => "stdin".to_string(),
    };
    debug!("Reading onboarding input from {}", source);

    let json = read_input(args.input.as_deref())
        .with_context(|| format!("Failed to read input from {}", source))?;
    let output = map_json(&json, args.pretty).context("Failed to map onboarding input")?;

    println!("{}", output);
    Ok(())
}
