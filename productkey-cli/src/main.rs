//! productkey: generate and validate product license keys.
//!
//! Usage:
//!   productkey generate --count 10
//!   productkey validate ABCDE-FGHIJ-KLMNO-PQRST-UVWX2
//!   productkey validate --file keys.txt
//!
//! `validate` reads stdin when given neither keys nor a file, and exits
//! with status 1 if any key is invalid.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use productkey_cli::{
    all_valid, read_keys, read_keys_from_file, render_keys, render_reports, run_generate,
    validate_keys, DEFAULT_COUNT,
};
use tracing::{warn, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "productkey")]
#[command(about = "Generate and validate product license keys")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate new license keys
    Generate {
        /// Number of keys to generate
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Seed for a reproducible key sequence
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON array instead of one key per line
        #[arg(long)]
        json: bool,
    },
    /// Validate license keys
    Validate {
        /// Keys to validate
        keys: Vec<String>,

        /// File with one key per line
        #[arg(short, long, conflicts_with = "keys")]
        file: Option<PathBuf>,

        /// Print JSON reports
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    match args.command {
        Command::Generate { count, seed, json } => {
            let keys = run_generate(count, seed);
            println!("{}", render_keys(&keys, json)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { keys, file, json } => {
            let keys = match file {
                Some(path) => read_keys_from_file(&path)?,
                None if !keys.is_empty() => keys,
                None => {
                    let stdin = io::stdin();
                    if stdin.is_terminal() {
                        warn!("reading keys from stdin, one per line");
                    }
                    read_keys(stdin.lock()).context("failed to read keys from stdin")?
                }
            };

            let reports = validate_keys(&keys);
            println!("{}", render_reports(&reports, json)?);

            if all_valid(&reports) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
