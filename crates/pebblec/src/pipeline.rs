//! Phase orchestration: lex → parse → bind → lower → evaluate.
//!
//! Each phase runs against the same `Handler`; if it produced any
//! diagnostic, the pipeline prints the accumulated list and halts before
//! the next phase, except inside the binder where `Error` nodes let it
//! keep recovering internally before the whole run is judged to have
//! failed.

use std::io::{BufRead, Write};

use tracing::debug;

use pebble_util::diagnostic::Handler;

use crate::config::{Config, EmitTarget};
use crate::error::{PebbleCError, Result};

pub fn run(config: &Config, source: &str, stdin: impl BufRead, stdout: impl Write) -> Result<()> {
    let handler = Handler::new();

    debug!("lexing {} bytes", source.len());
    let mut lex_handler = Handler::new();
    let tokens = pebble_lex::tokenize(source, &mut lex_handler);
    for diag in lex_handler.diagnostics() {
        handler.emit_diagnostic(diag);
    }
    if config.emit == Some(EmitTarget::Tokens) {
        if handler.has_errors() {
            return report_and_fail(&handler);
        }
        for token in &tokens {
            println!("{token:?}");
        }
        return Ok(());
    }
    if handler.has_errors() {
        return report_and_fail(&handler);
    }

    debug!("parsing {} tokens", tokens.len());
    let mut parser = pebble_par::Parser::new(&tokens, &handler);
    let unit = parser.parse();
    if config.emit == Some(EmitTarget::Ast) {
        if handler.has_errors() {
            return report_and_fail(&handler);
        }
        println!("{unit:#?}");
        return Ok(());
    }
    if handler.has_errors() {
        return report_and_fail(&handler);
    }

    debug!("binding {} top-level declarations", unit.len());
    let bound = pebble_sem::bind_program(&unit, &handler);
    if config.emit == Some(EmitTarget::Bound) {
        if handler.has_errors() {
            return report_and_fail(&handler);
        }
        println!("{:#?}", bound.top_level);
        return Ok(());
    }
    if handler.has_errors() {
        return report_and_fail(&handler);
    }

    debug!("lowering {} functions", bound.functions.len());
    let lowered = pebble_low::lower_program(&bound);
    if config.emit == Some(EmitTarget::Lowered) {
        if handler.has_errors() {
            return report_and_fail(&handler);
        }
        println!("{:#?}", lowered.top_level);
        return Ok(());
    }

    debug!("evaluating");
    let mut evaluator = pebble_eval::Evaluator::new(&lowered, stdin, stdout);
    evaluator.run().map_err(PebbleCError::Runtime)
}

fn report_and_fail(handler: &Handler) -> Result<()> {
    let diagnostics = handler.diagnostics();
    for diag in &diagnostics {
        let code = diag
            .code
            .map(|c| format!("[{}] ", c.as_str()))
            .unwrap_or_default();
        eprintln!(
            "{}: {}{} (line {}, column {})",
            diag.level, code, diag.message, diag.span.line, diag.span.column
        );
    }
    Err(PebbleCError::CompileFailed(diagnostics.len()))
}
