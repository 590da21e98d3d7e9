use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use gib_core::config::{
    parse_alphabet, TrainingConfig, TrainingPaths, DEFAULT_BAD_PATH, DEFAULT_CORPUS_PATH,
    DEFAULT_GOOD_PATH, DEFAULT_MODEL_PATH, DEFAULT_PRIOR,
};
use gib_core::persistence::save_model;
use gib_core::Trainer;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Trains a gibberish model from a text corpus and labeled good/bad lines.
#[derive(Parser, Debug)]
#[command(name = "gib_train", version)]
struct Args {
    /// Text used to count character transitions
    #[arg(long, default_value = DEFAULT_CORPUS_PATH)]
    corpus: PathBuf,

    /// Lines that must be classified as plausible, one per line
    #[arg(long, default_value = DEFAULT_GOOD_PATH)]
    good: PathBuf,

    /// Lines that must be classified as gibberish, one per line
    #[arg(long, default_value = DEFAULT_BAD_PATH)]
    bad: PathBuf,

    /// Where to write the model (.json for JSON, bincode otherwise)
    #[arg(long, short, env = "GIB_MODEL", default_value = DEFAULT_MODEL_PATH)]
    output: PathBuf,

    /// `hungarian`, `english`, or the literal accepted characters
    #[arg(long, default_value = "hungarian")]
    alphabet: String,

    /// Count added to every transition before normalizing
    #[arg(long, default_value_t = DEFAULT_PRIOR)]
    prior: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = TrainingConfig::new(parse_alphabet(&args.alphabet)?, args.prior)?;
    let paths = TrainingPaths {
        corpus: args.corpus,
        good: args.good,
        bad: args.bad,
        output: args.output,
    };

    // A failed separation returns here, before anything is written.
    let (model, calibration) = Trainer::new(config).train_files(&paths)?;
    save_model(&model, &paths.output)
        .with_context(|| format!("could not write model to {}", paths.output.display()))?;

    println!("{}", "Model trained".green().bold());
    println!("  worst good score : {:.6}", calibration.min_good);
    println!("  best bad score   : {:.6}", calibration.max_bad);
    println!("  threshold        : {}", format!("{:.6}", calibration.threshold).cyan());
    println!("  saved to         : {}", paths.output.display());
    Ok(())
}
