//! Flattening: expands every `Block` produced by rewriting in
//! place, yielding the flat statement sequence the evaluator indexes by
//! position. Iterative and stack-based rather than recursive, so a deeply
//! nested `if`-chain doesn't grow the native call stack.

use pebble_sem::hir::BoundStmt;

/// Flattens `stmt` into a single top-to-bottom sequence with no `Block`
/// nodes left.
///
/// A work stack holds statements still to emit; a `Block`'s children are
/// pushed in reverse so popping them (stack order is LIFO) restores their
/// original left-to-right order, and a child that is itself a `Block`
/// gets the same treatment the moment it is popped.
pub fn flatten(stmt: BoundStmt) -> Vec<BoundStmt> {
    let mut output = Vec::new();
    let mut work = vec![stmt];
    while let Some(item) = work.pop() {
        match item {
            BoundStmt::Block(stmts, _) => {
                for s in stmts.into_iter().rev() {
                    work.push(s);
                }
            }
            other => output.push(other),
        }
    }
    output
}
