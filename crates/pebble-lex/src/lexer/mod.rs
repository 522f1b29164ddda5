//! Lexer implementation, split by the kind of lexeme each file scans.
//!
//! - `core` — the `Lexer` struct, its dispatch table, and shared helpers.
//! - `identifier` — identifiers and the fixed keyword set.
//! - `number` — decimal integer literals.
//! - `string` — string literals (`""` is an escaped quote).
//! - `operator` — one- and two-char operators/punctuators.

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
