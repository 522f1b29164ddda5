//! Runtime errors: the two ways a fully bound program can
//! still fail at execution time.

use thiserror::Error;

use pebble_util::diagnostic::DiagnosticCode;
use pebble_util::span::Span;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("division by zero")]
    DivisionByZero { span: Span },

    /// `int(s)` where `s` is not a valid signed 32-bit integer literal.
    ///
    /// The source language this binder is grounded on silently falls back
    /// to `-1` here; that masks a real error at the call site, so this
    /// evaluator raises a diagnostic instead.
    #[error("'{text}' is not a valid int")]
    InvalidIntConversion { text: String, span: Span },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    pub fn code(&self) -> Option<DiagnosticCode> {
        match self {
            RuntimeError::DivisionByZero { .. } => Some(DiagnosticCode::E_EVAL_DIVISION_BY_ZERO),
            RuntimeError::InvalidIntConversion { .. } => Some(DiagnosticCode::E_EVAL_BAD_INT_CONVERSION),
            RuntimeError::Io(_) => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            RuntimeError::DivisionByZero { span } => Some(*span),
            RuntimeError::InvalidIntConversion { span, .. } => Some(*span),
            RuntimeError::Io(_) => None,
        }
    }
}
