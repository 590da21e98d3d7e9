use anyhow::{Context, Result};
use clap::Parser;
use gib_core::{classify_stream, config::DEFAULT_MODEL_PATH, persistence::load_model};
use std::io::{stdin, stdout};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Reads lines from stdin and prints `True` for plausible text, `False` for gibberish.
#[derive(Parser, Debug)]
#[command(name = "gib_detect", version)]
struct Args {
    /// Trained model file (.json, or bincode for anything else)
    #[arg(env = "GIB_MODEL", default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only verdicts.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let model = load_model(&args.model)?;

    let classified = classify_stream(&model, stdin().lock(), stdout().lock())
        .context("failed while classifying input")?;
    info!(classified, "end of input");
    Ok(())
}
