//! Structural rewriting: turns `if`/`while`/`for` into
//! sequences of `Label`/`Goto`/`ConditionalGoto` around the statements
//! they already contain. Every other statement kind passes through
//! unchanged. The result still contains nested `Block`s — [`crate::flatten`]
//! expands those in a separate pass, exactly as the statement kind it
//! rewrote into one.

use std::rc::Rc;

use pebble_sem::hir::{
    AssignmentBoundExpr, BinaryBoundExpr, BoundExpr, BoundStmt, ForBoundStmt, IfBoundStmt,
    LiteralBoundExpr, VariableBoundExpr, VarDeclBoundStmt, WhileBoundStmt,
};
use pebble_sem::types::{BoundBinaryOp, Type};

use crate::label::LabelGen;

pub fn rewrite_stmt(stmt: &BoundStmt, gen: &mut LabelGen) -> BoundStmt {
    match stmt {
        BoundStmt::Block(stmts, span) => {
            BoundStmt::Block(stmts.iter().map(|s| rewrite_stmt(s, gen)).collect(), *span)
        }
        BoundStmt::If(s) => rewrite_if(s, gen),
        BoundStmt::While(w) => rewrite_while(w, gen),
        BoundStmt::For(f) => rewrite_for(f, gen),
        other => other.clone(),
    }
}

/// `if (cond) then [else else_branch]`:
///
/// ```text
/// ConditionalGoto(else_or_end, cond, jump_if_false = true)
/// then
/// [Goto(end)]
/// [Label(else)
///  else_branch]
/// Label(end)
/// ```
fn rewrite_if(s: &IfBoundStmt, gen: &mut LabelGen) -> BoundStmt {
    let then_branch = rewrite_stmt(&s.then_branch, gen);
    match &s.else_branch {
        Some(else_branch) => {
            let else_branch = rewrite_stmt(else_branch, gen);
            let else_label = gen.fresh("if_else");
            let end_label = gen.fresh("if_end");
            BoundStmt::Block(
                vec![
                    cond_goto(else_label, s.condition.clone(), true, s.span),
                    then_branch,
                    BoundStmt::Goto(end_label, s.span),
                    BoundStmt::Label(else_label, s.span),
                    else_branch,
                    BoundStmt::Label(end_label, s.span),
                ],
                s.span,
            )
        }
        None => {
            let end_label = gen.fresh("if_end");
            BoundStmt::Block(
                vec![
                    cond_goto(end_label, s.condition.clone(), true, s.span),
                    then_branch,
                    BoundStmt::Label(end_label, s.span),
                ],
                s.span,
            )
        }
    }
}

/// `while (cond) body`, using the binder-assigned
/// `break_label`/`continue_label` so every `break`/`continue` already
/// bound inside `body` lands in the right place:
///
/// ```text
/// Goto(check)
/// Label(continue_label)
/// body
/// Label(check)
/// ConditionalGoto(continue_label, cond, jump_if_false = false)
/// Label(break_label)
/// ```
fn rewrite_while(w: &WhileBoundStmt, gen: &mut LabelGen) -> BoundStmt {
    let body = rewrite_stmt(&w.body, gen);
    let check_label = gen.fresh("while_check");
    BoundStmt::Block(
        vec![
            BoundStmt::Goto(check_label, w.span),
            BoundStmt::Label(w.continue_label, w.span),
            body,
            BoundStmt::Label(check_label, w.span),
            cond_goto(w.continue_label, w.condition.clone(), false, w.span),
            BoundStmt::Label(w.break_label, w.span),
        ],
        w.span,
    )
}

/// `for i = lo to hi body` desugars to a bounds-checked `while` over a
/// hidden upper-bound local:
///
/// ```text
/// var <induction> = lo
/// var <upper> = hi
/// while (induction <= upper) { body; Label(increment); induction = induction + 1; }
/// ```
///
/// `continue` inside `body` was already bound to this loop's
/// `continue_label`; that label is reused here as the inline
/// `increment` marker, not as the synthesized `while`'s own top-of-body
/// label — a `continue` must run the increment before looping back, not
/// skip it. The synthesized `while` gets its own fresh continue label for
/// that top-of-body position.
fn rewrite_for(f: &ForBoundStmt, gen: &mut LabelGen) -> BoundStmt {
    let var_decl = BoundStmt::VariableDeclaration(VarDeclBoundStmt {
        symbol: Rc::clone(&f.var),
        init: f.lower.clone(),
        span: f.span,
    });
    let upper_decl = BoundStmt::VariableDeclaration(VarDeclBoundStmt {
        symbol: Rc::clone(&f.upper_var),
        init: f.upper.clone(),
        span: f.span,
    });

    let increment_label = f.continue_label;
    let while_continue_label = gen.fresh("for_continue");

    let var_ref = || BoundExpr::Variable(VariableBoundExpr { symbol: Rc::clone(&f.var), span: f.span });
    let condition = BoundExpr::Binary(BinaryBoundExpr {
        op: BoundBinaryOp::LtEq,
        left: Box::new(var_ref()),
        right: Box::new(BoundExpr::Variable(VariableBoundExpr {
            symbol: Rc::clone(&f.upper_var),
            span: f.span,
        })),
        ty: Type::Bool,
        span: f.span,
    });
    let increment = BoundStmt::ExpressionStmt(
        BoundExpr::Assignment(AssignmentBoundExpr {
            symbol: Rc::clone(&f.var),
            value: Box::new(BoundExpr::Binary(BinaryBoundExpr {
                op: BoundBinaryOp::Add,
                left: Box::new(var_ref()),
                right: Box::new(BoundExpr::Literal(LiteralBoundExpr {
                    value: pebble_sem::hir::LiteralValueKind::Int(1),
                    ty: Type::Int,
                    span: f.span,
                })),
                ty: Type::Int,
                span: f.span,
            })),
            span: f.span,
        }),
        f.span,
    );

    let body = BoundStmt::Block(
        vec![(*f.body).clone(), BoundStmt::Label(increment_label, f.span), increment],
        f.span,
    );

    let synthesized = WhileBoundStmt {
        condition,
        body: Box::new(body),
        break_label: f.break_label,
        continue_label: while_continue_label,
        span: f.span,
    };

    BoundStmt::Block(
        vec![var_decl, upper_decl, rewrite_while(&synthesized, gen)],
        f.span,
    )
}

fn cond_goto(label: pebble_util::symbol::Symbol, condition: BoundExpr, jump_if_false: bool, span: pebble_util::span::Span) -> BoundStmt {
    BoundStmt::ConditionalGoto {
        label,
        condition,
        jump_if_false,
        span,
    }
}
