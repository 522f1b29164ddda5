//! Configuration module for the pebblec CLI.
//!
//! The pebble language has no project/config file format (no modules, no
//! multi-file projects), so there is nothing to load from disk. `Config`
//! still exists as a seam for a future file-based config loader, mirroring
//! the split between CLI flags and a resolved configuration struct that a
//! larger CLI would use.

use std::path::PathBuf;

/// What an `--emit` run should dump instead of executing the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitTarget {
    Tokens,
    Ast,
    Bound,
    Lowered,
}

impl EmitTarget {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tokens" => Some(Self::Tokens),
            "ast" => Some(Self::Ast),
            "bound" => Some(Self::Bound),
            "lowered" => Some(Self::Lowered),
            _ => None,
        }
    }
}

/// The resolved configuration for one run of the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub emit: Option<EmitTarget>,
    pub verbose: bool,
    pub no_color: bool,
}
