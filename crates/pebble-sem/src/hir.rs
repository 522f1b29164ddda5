//! The bound tree: the typed mirror of the AST, plus the three
//! lowering-only statement forms (`Label`, `Goto`, `ConditionalGoto`) and
//! the `Conversion`/`Error` expressions the binder itself introduces.
//!
//! `Goto`/`ConditionalGoto`/`Label` are produced starting at bind time
//! (break/continue already lower to `Goto` during binding) and are
//! rewritten further by `pebble-low`, so they live here rather than in
//! a separate post-lowering tree type.

use std::fmt;
use std::rc::Rc;

use pebble_lex::LiteralValue;
use pebble_util::span::Span;
use pebble_util::symbol::Symbol;

use crate::types::{BoundBinaryOp, BoundUnaryOp, Type};

/// Where a `Variable` symbol came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Local,
    Global,
    Parameter,
}

/// A resolved variable binding, shared (never mutated) by every bound
/// expression that references it.
#[derive(Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: Symbol,
    pub ty: Type,
    pub is_read_only: bool,
    pub kind: VariableKind,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_str())
    }
}

/// A resolved function signature. Built-ins
/// (`print`, `input`) have `is_builtin = true` and no declaration to bind
/// a body against.
#[derive(Debug, PartialEq)]
pub struct FunctionSymbol {
    pub name: Symbol,
    pub parameters: Vec<Rc<Variable>>,
    pub return_type: Type,
    pub is_builtin: bool,
}

/// A literal value as it appears in the bound tree — the same three-way
/// tagged union as [`pebble_lex::LiteralValue`], reused rather than
/// duplicated since the lexer already classified `true`/`false`/number/
/// string tokens into it.
pub type LiteralValueKind = LiteralValue;

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralBoundExpr {
    pub value: LiteralValueKind,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableBoundExpr {
    pub symbol: Rc<Variable>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentBoundExpr {
    pub symbol: Rc<Variable>,
    pub value: Box<BoundExpr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryBoundExpr {
    pub op: BoundUnaryOp,
    pub operand: Box<BoundExpr>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryBoundExpr {
    pub op: BoundBinaryOp,
    pub left: Box<BoundExpr>,
    pub right: Box<BoundExpr>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallBoundExpr {
    pub function: Rc<FunctionSymbol>,
    pub args: Vec<BoundExpr>,
    pub span: Span,
}

/// A value reinterpreted at a different type — the only way types change
/// in the bound tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionBoundExpr {
    pub to: Type,
    pub expr: Box<BoundExpr>,
    pub span: Span,
}

/// The typed mirror of [`pebble_par::ast::Expr`].
#[derive(Debug, Clone, PartialEq)]
pub enum BoundExpr {
    Literal(LiteralBoundExpr),
    Variable(VariableBoundExpr),
    Assignment(AssignmentBoundExpr),
    Unary(UnaryBoundExpr),
    Binary(BinaryBoundExpr),
    Call(CallBoundExpr),
    Conversion(ConversionBoundExpr),
    /// Placeholder left in place of an expression the binder could not
    /// resolve; its type is always [`Type::Error`] so that operators and
    /// conversions built on top of it suppress further diagnostics.
    Error(Span),
}

impl BoundExpr {
    pub fn ty(&self) -> Type {
        match self {
            BoundExpr::Literal(e) => e.ty,
            BoundExpr::Variable(e) => e.symbol.ty,
            BoundExpr::Assignment(e) => e.symbol.ty,
            BoundExpr::Unary(e) => e.ty,
            BoundExpr::Binary(e) => e.ty,
            BoundExpr::Call(e) => e.function.return_type,
            BoundExpr::Conversion(e) => e.to,
            BoundExpr::Error(_) => Type::Error,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            BoundExpr::Literal(e) => e.span,
            BoundExpr::Variable(e) => e.span,
            BoundExpr::Assignment(e) => e.span,
            BoundExpr::Unary(e) => e.span,
            BoundExpr::Binary(e) => e.span,
            BoundExpr::Call(e) => e.span,
            BoundExpr::Conversion(e) => e.span,
            BoundExpr::Error(span) => *span,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.ty(), Type::Error)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclBoundStmt {
    pub symbol: Rc<Variable>,
    pub init: BoundExpr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfBoundStmt {
    pub condition: BoundExpr,
    pub then_branch: Box<BoundStmt>,
    pub else_branch: Option<Box<BoundStmt>>,
    pub span: Span,
}

/// A bound `while`, carrying the break/continue label pair the binder
/// generated for it up front, so that any `break`/`continue` nested in
/// `body` already binds as a `Goto` to one of these two labels by the time
/// binding finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileBoundStmt {
    pub condition: BoundExpr,
    pub body: Box<BoundStmt>,
    pub break_label: Symbol,
    pub continue_label: Symbol,
    pub span: Span,
}

/// A bound `for i = lo to hi body`. `var` is the read-only induction
/// variable; `upper_var` is the fresh hidden upper-bound local introduced
/// for later lowering — both already declared in a scope the binder opened
/// for this loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForBoundStmt {
    pub var: Rc<Variable>,
    pub upper_var: Rc<Variable>,
    pub lower: BoundExpr,
    pub upper: BoundExpr,
    pub body: Box<BoundStmt>,
    pub break_label: Symbol,
    pub continue_label: Symbol,
    pub span: Span,
}

/// The typed mirror of [`pebble_par::ast::Stmt`], plus the lowering-only
/// `Label`/`Goto`/`ConditionalGoto` forms.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundStmt {
    ExpressionStmt(BoundExpr, Span),
    VariableDeclaration(VarDeclBoundStmt),
    Block(Vec<BoundStmt>, Span),
    If(IfBoundStmt),
    While(WhileBoundStmt),
    For(ForBoundStmt),
    Return(BoundExpr, Span),
    Label(Symbol, Span),
    Goto(Symbol, Span),
    ConditionalGoto {
        label: Symbol,
        condition: BoundExpr,
        jump_if_false: bool,
        span: Span,
    },
    /// A statement the binder could not bind; produced so binding can
    /// continue. Carries no semantics at evaluation time.
    Error(Span),
}

impl BoundStmt {
    pub fn span(&self) -> Span {
        match self {
            BoundStmt::ExpressionStmt(_, span) => *span,
            BoundStmt::VariableDeclaration(s) => s.span,
            BoundStmt::Block(_, span) => *span,
            BoundStmt::If(s) => s.span,
            BoundStmt::While(s) => s.span,
            BoundStmt::For(s) => s.span,
            BoundStmt::Return(_, span) => *span,
            BoundStmt::Label(_, span) => *span,
            BoundStmt::Goto(_, span) => *span,
            BoundStmt::ConditionalGoto { span, .. } => *span,
            BoundStmt::Error(span) => *span,
        }
    }
}

/// The whole bound program: global variables, one flattened block per
/// function body, and the top-level block of statements that sit outside
/// any function.
pub struct BoundProgram {
    pub global_variables: indexmap::IndexMap<Symbol, Rc<Variable>>,
    pub functions: indexmap::IndexMap<Symbol, (Rc<FunctionSymbol>, BoundStmt)>,
    pub top_level: BoundStmt,
}
