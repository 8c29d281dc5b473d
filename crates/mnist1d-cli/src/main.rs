//! MNIST-1D CLI - Command-line interface for the 1D signal augmentation pipeline
//!
//! This binary provides commands for validating dataset configs, previewing
//! augmented templates, and generating datasets in memory.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mnist1d_augment::AugmentError;
use mnist1d_cli::commands;
use mnist1d_cli::logging;
use mnist1d_spec::BackendError;

/// MNIST-1D - Seeded 1D digit-signal augmentation
#[derive(Parser)]
#[command(name = "mnist1d")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a dataset config file
    Validate {
        /// Path to the config file (JSON)
        #[arg(short, long)]
        config: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Augment templates and print them as ASCII art
    Preview {
        /// Path to the config file (JSON); built-in defaults when omitted
        #[arg(short, long)]
        config: Option<String>,

        /// Seed override
        #[arg(short, long)]
        seed: Option<u64>,

        /// Template label to preview (0-9); every template when omitted
        #[arg(short, long)]
        label: Option<u8>,

        /// Columns per rendered row
        #[arg(short, long, default_value_t = commands::preview::DEFAULT_WIDTH)]
        width: usize,
    },

    /// Generate a dataset in memory and print summary statistics
    Generate {
        /// Path to the config file (JSON); built-in defaults when omitted
        #[arg(short, long)]
        config: Option<String>,

        /// Seed override
        #[arg(short, long)]
        seed: Option<u64>,

        /// Generate with this many parallel workers
        #[arg(short, long)]
        workers: Option<usize>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("{}: {}", colored::Colorize::yellow("warning"), e);
    }

    let result = match cli.command {
        Commands::Validate { config, json } => commands::validate::run(&config, json),
        Commands::Preview {
            config,
            seed,
            label,
            width,
        } => commands::preview::run(config.as_deref(), seed, label, width),
        Commands::Generate {
            config,
            seed,
            workers,
            json,
        } => commands::generate::run(config.as_deref(), seed, workers, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), error_message(&e));
            ExitCode::from(1)
        }
    }
}

/// Renders an error chain, prefixed with the backend code when one is
/// underneath.
fn error_message(e: &anyhow::Error) -> String {
    match e.downcast_ref::<AugmentError>() {
        Some(inner) => format!("[{}] {:#}", inner.code(), e),
        None => format!("{:#}", e),
    }
}
