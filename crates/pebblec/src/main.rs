//! pebblec - the command-line driver for the pebble language.
//!
//! Reads a source file, runs it through the lex/parse/bind/lower/evaluate
//! pipeline, and wires the program's `print`/`input` calls to this
//! process's stdout/stdin.

mod config;
mod error;
mod pipeline;

use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser as ClapParser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{Config, EmitTarget};
use error::{PebbleCError, Result};

/// pebblec - lexer, parser, binder, lowerer and evaluator for the pebble
/// language.
#[derive(ClapParser, Debug)]
#[command(name = "pebblec")]
#[command(author = "Pebble Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run a pebble source file", long_about = None)]
struct Cli {
    /// Path to the pebble source file to run
    path: PathBuf,

    /// Dump an intermediate phase instead of executing the program
    #[arg(long, value_parser = ["tokens", "ast", "bound", "lowered"])]
    emit: Option<String>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true, env = "PEBBLEC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, global = true, env = "PEBBLEC_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let exit_code = match run() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    let config = Config {
        input: cli.path.clone(),
        emit: cli.emit.as_deref().map(|s| {
            EmitTarget::from_str(s).expect("clap's value_parser already restricted this set")
        }),
        verbose: cli.verbose,
        no_color: cli.no_color,
    };

    let source = std::fs::read_to_string(&config.input).map_err(|source| PebbleCError::InputNotFound {
        path: config.input.clone(),
        source,
    })?;

    let stdin = BufReader::new(io::stdin());
    let stdout = io::stdout();
    pipeline::run(&config, &source, stdin, stdout.lock())
}

fn init_logging(verbose: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}
