//! Integration tests for the lowerer: bind a small program with
//! `pebble-sem`, lower it, and check the resulting flat sequence's shape.

use pebble_sem::hir::BoundStmt;
use pebble_util::diagnostic::Handler;

use crate::lower_program;

fn lower(source: &str) -> Vec<BoundStmt> {
    let handler = Handler::new();
    let program = pebble_sem::bind_source(source, &handler);
    assert!(!handler.has_errors(), "unexpected diagnostics: {:?}", handler.diagnostics());
    lower_program(&program).top_level
}

#[test]
fn a_plain_statement_sequence_lowers_unchanged() {
    let flat = lower("var x: int = 1; var y: int = 2;");
    assert_eq!(flat.len(), 2);
    assert!(flat.iter().all(|s| matches!(s, BoundStmt::VariableDeclaration(_))));
}

#[test]
fn if_without_else_lowers_to_one_conditional_goto_and_one_label() {
    let flat = lower("if (true) { var x: int = 1; }");
    let gotos = flat.iter().filter(|s| matches!(s, BoundStmt::ConditionalGoto { .. })).count();
    let labels = flat.iter().filter(|s| matches!(s, BoundStmt::Label(..))).count();
    assert_eq!(gotos, 1);
    assert_eq!(labels, 1);
}

#[test]
fn if_with_else_lowers_to_two_labels_and_an_unconditional_goto() {
    let flat = lower("if (true) { var x: int = 1; } else { var y: int = 2; }");
    let labels = flat.iter().filter(|s| matches!(s, BoundStmt::Label(..))).count();
    let unconditional = flat.iter().filter(|s| matches!(s, BoundStmt::Goto(..))).count();
    assert_eq!(labels, 2);
    assert_eq!(unconditional, 1);
}

#[test]
fn while_lowers_with_no_nested_blocks_remaining() {
    let flat = lower("while (true) { var x: int = 1; break; continue; }");
    assert!(!flat.iter().any(|s| matches!(s, BoundStmt::Block(..))));
    // break + continue each become a Goto, plus the loop's own unconditional
    // entry goto.
    assert_eq!(flat.iter().filter(|s| matches!(s, BoundStmt::Goto(..))).count(), 3);
}

#[test]
fn for_loop_lowers_to_induction_and_upper_bound_declarations_then_a_loop() {
    let flat = lower("for i = 1 to 3 { print(string(i)); }");
    let decls = flat.iter().filter(|s| matches!(s, BoundStmt::VariableDeclaration(_))).count();
    // i = 1, upper = 3, then the `print(string(i))` call is an ExpressionStmt.
    assert_eq!(decls, 2);
    assert!(!flat.iter().any(|s| matches!(s, BoundStmt::Block(..))));
}

#[test]
fn for_loop_break_lands_outside_the_increment_step() {
    let flat = lower("for i = 1 to 3 { break; }");
    // a reachable `break` must still produce exactly one break-target label
    // and no leftover structured nodes.
    assert!(!flat.iter().any(|s| matches!(s, BoundStmt::For(_) | BoundStmt::While(_) | BoundStmt::If(_))));
}
