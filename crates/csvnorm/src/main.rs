use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use csvnorm_core::pipeline;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Normalize CSV exports on stdin to canonical form on stdout", long_about = None)]
struct Cli {
    /// Read CSV from this file instead of standard input
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is the output CSV stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    let summary = match &cli.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            pipeline::run(BufReader::new(file), output)
        }
        None => {
            let stdin = io::stdin();
            pipeline::run(stdin.lock(), output)
        }
    }
    .context("stream processing failed")?;

    info!(
        "normalized {} rows, dropped {}",
        summary.rows_emitted, summary.rows_dropped
    );

    Ok(())
}
