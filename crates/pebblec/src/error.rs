//! Error handling module for the pebblec CLI.
//!
//! This module provides a custom error type using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the pebblec CLI application.
#[derive(Error, Debug)]
pub enum PebbleCError {
    /// The input source file could not be opened.
    #[error("could not read '{path}': {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lexing, parsing, or binding produced at least one diagnostic; the
    /// pipeline halted before reaching evaluation.
    #[error("{0} diagnostic(s) reported, compilation aborted")]
    CompileFailed(usize),

    /// The evaluator raised a runtime error while executing the program.
    #[error("runtime error: {0}")]
    Runtime(#[from] pebble_eval::error::RuntimeError),

    /// Error when IO operations fail outside of reading the input file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PebbleCError.
pub type Result<T> = std::result::Result<T, PebbleCError>;
