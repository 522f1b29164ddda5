//! pebble-low — the lowerer.
//!
//! Rewrites a bound program's structured control flow (`if`/`while`/`for`)
//! into the flat `Label`/`Goto`/`ConditionalGoto` form the evaluator
//! executes by instruction pointer. Operates directly on
//! [`pebble_sem::hir::BoundStmt`]: there is no separate mid-level IR, since
//! lowering here is pure structural rewriting, not code generation.
//!
//! Two passes per function body: [`rewrite::rewrite_stmt`] replaces each
//! structured construct with an (still nested) equivalent built from
//! simpler statements, then [`flatten::flatten`] expands every `Block`
//! into one flat sequence.

pub mod flatten;
pub mod label;
pub mod rewrite;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod tests;

use std::rc::Rc;

use indexmap::IndexMap;

use pebble_sem::hir::{BoundProgram, BoundStmt, FunctionSymbol, Variable};
use pebble_util::symbol::Symbol;

/// A program after lowering: each body is now a flat statement sequence
/// rather than a single (possibly nested) `BoundStmt`.
pub struct LoweredProgram {
    pub global_variables: IndexMap<Symbol, Rc<Variable>>,
    pub functions: IndexMap<Symbol, (Rc<FunctionSymbol>, Vec<BoundStmt>)>,
    pub top_level: Vec<BoundStmt>,
}

pub fn lower_program(program: &BoundProgram) -> LoweredProgram {
    let top_level = lower_body(&program.top_level);

    let mut functions = IndexMap::new();
    for (name, (symbol, body)) in &program.functions {
        functions.insert(*name, (Rc::clone(symbol), lower_body(body)));
    }

    LoweredProgram {
        global_variables: program.global_variables.clone(),
        functions,
        top_level,
    }
}

fn lower_body(body: &BoundStmt) -> Vec<BoundStmt> {
    let mut gen = label::LabelGen::new();
    let rewritten = rewrite::rewrite_stmt(body, &mut gen);
    flatten::flatten(rewritten)
}
