//! Prints a before/after/result report for each built-in sequence operation,
//! grouped into mutating, non-mutating and feature-detected copy operations.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use seqdemo::core::capabilities::{Capabilities, CopyOp};
use seqdemo::exit_codes;
use seqdemo::harness::Harness;
use seqdemo::io::config::{DemoConfig, load_config};
use seqdemo::logging;
use seqdemo::script::run_script;

#[derive(Parser)]
#[command(
    name = "seqdemo",
    version,
    about = "Show which sequence operations mutate their input"
)]
struct Cli {
    /// Load settings from a TOML file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Treat a copy operation as missing from the runtime (repeatable).
    #[arg(long, value_name = "OP")]
    unsupported: Vec<CopyOp>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAULT);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path).context("load config")?,
        None => DemoConfig::default(),
    };
    let runtime = config.runtime_profile(&cli.unsupported);
    let caps = Capabilities::probe(&runtime);

    let stdout = io::stdout();
    let mut harness = Harness::new(BufWriter::new(stdout.lock()), config.divider_width);
    run_script(&mut harness, &caps)?;
    harness.into_inner().flush().context("flush stdout")?;
    info!("demo complete");
    Ok(())
}
