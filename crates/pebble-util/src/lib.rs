//! pebble-util - Core Utilities and Foundation Types
//!
//! This crate provides the fundamental types shared by every phase of the
//! pebble compiler and evaluator: source locations ([`span`]), string
//! interning ([`symbol`]), diagnostic reporting ([`diagnostic`]), and the
//! structural error types used internally by this crate ([`error`]).
//!
//! # Design principles
//!
//! - **Zero-cost abstractions.** `Span` and `Symbol` are both small `Copy`
//!   types; neither allocates on the hot path once interned.
//! - **One diagnostic channel.** Every phase reports problems through
//!   [`diagnostic::Handler`], never through `panic!` or stderr directly.
//!
//! # Examples
//!
//! ```
//! use pebble_util::symbol::Symbol;
//! use pebble_util::span::Span;
//! use pebble_util::diagnostic::Handler;
//!
//! let name = Symbol::intern("total");
//! let handler = Handler::new();
//! handler
//!     .build_error(Span::DUMMY, format!("undeclared name '{name}'"))
//!     .emit(&handler);
//! assert!(handler.has_errors());
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;
