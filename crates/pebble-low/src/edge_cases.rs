//! Edge case tests for the lowerer: nested control flow, label
//! uniqueness across sibling constructs, and the for-loop desugar's
//! continue/break split.

use pebble_sem::hir::BoundStmt;
use pebble_util::diagnostic::Handler;
use pebble_util::symbol::Symbol;

use crate::lower_program;

fn lower(source: &str) -> Vec<BoundStmt> {
    let handler = Handler::new();
    let program = pebble_sem::bind_source(source, &handler);
    assert!(!handler.has_errors(), "unexpected diagnostics: {:?}", handler.diagnostics());
    lower_program(&program).top_level
}

fn label_names(flat: &[BoundStmt]) -> Vec<Symbol> {
    flat.iter()
        .filter_map(|s| match s {
            BoundStmt::Label(name, _) => Some(*name),
            _ => None,
        })
        .collect()
}

#[test]
fn nested_if_statements_produce_distinct_labels() {
    let flat = lower("if (true) { if (false) { var x: int = 1; } }");
    let names = label_names(&flat);
    assert_eq!(names.len(), names.iter().collect::<std::collections::HashSet<_>>().len());
}

#[test]
fn an_if_nested_inside_a_while_body_fully_flattens() {
    let flat = lower("while (true) { if (true) { break; } else { continue; } }");
    assert!(!flat.iter().any(|s| matches!(
        s,
        BoundStmt::Block(..) | BoundStmt::If(_) | BoundStmt::While(_)
    )));
}

#[test]
fn empty_while_body_still_produces_the_full_check_scaffold() {
    let flat = lower("while (true) { }");
    assert_eq!(flat.iter().filter(|s| matches!(s, BoundStmt::Label(..))).count(), 2);
    assert_eq!(flat.iter().filter(|s| matches!(s, BoundStmt::Goto(..))).count(), 1);
    assert_eq!(
        flat.iter().filter(|s| matches!(s, BoundStmt::ConditionalGoto { .. })).count(),
        1
    );
}

#[test]
fn two_sibling_for_loops_never_share_a_label() {
    let flat = lower("for i = 1 to 2 { } for j = 1 to 2 { }");
    let names = label_names(&flat);
    assert_eq!(names.len(), names.iter().collect::<std::collections::HashSet<_>>().len());
}

#[test]
fn a_function_bodys_labels_are_independent_of_top_levels() {
    let handler = Handler::new();
    let program = pebble_sem::bind_source(
        "while (true) { break; } function f() { while (true) { break; } return 1; }",
        &handler,
    );
    assert!(!handler.has_errors());
    let lowered = lower_program(&program);
    let top_names = label_names(&lowered.top_level);
    let (_, f_body) = lowered.functions.get(&Symbol::intern("f")).unwrap();
    let f_names = label_names(f_body);
    // each body's label generator restarts at zero, so the two bodies'
    // label sets are expected to collide by name — they never execute in
    // the same instruction stream.
    assert_eq!(top_names, f_names);
}
