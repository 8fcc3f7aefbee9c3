//! CLI entry point for the HIBP batch checker.

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use clap::Parser;
use hibp_core::batch::{run_batch, write_header};
use hibp_core::config::{Config, load_dotenv};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    load_dotenv();
    let config = Config::from_env()?;
    debug!(?config, "Configuration loaded");

    let client = config
        .build_client()
        .context("Failed to initialize HIBP client")?;

    let file = File::open(&args.file)
        .with_context(|| format!("Could not read file '{}'", args.file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_header(
        &mut out,
        &args.file.display().to_string(),
        &config.masked_api_key(),
    )?;

    info!(file = %args.file.display(), "Checking emails");
    run_batch(&client, BufReader::new(file), &mut out)
        .await
        .with_context(|| format!("Could not process file '{}'", args.file.display()))?;
    out.flush()?;

    Ok(())
}
