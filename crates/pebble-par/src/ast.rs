//! AST node definitions: syntax-faithful, untyped tree produced
//! by the parser and consumed by the binder.

use pebble_lex::LiteralValue;
use pebble_util::span::Span;
use pebble_util::symbol::Symbol;

/// A type annotation written as `: IDENT` (`TypeClause` in the grammar).
#[derive(Clone, Debug, PartialEq)]
pub struct TypeClause {
    pub name: Symbol,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Plus,
    Negate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEq,
    NotEq,
    And,
    Or,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NameExpr {
    pub name: Symbol,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParenExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssignExpr {
    pub name: Symbol,
    pub name_span: Span,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallExpr {
    pub callee: Symbol,
    pub callee_span: Span,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// One variant per expression production in the grammar.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Name(NameExpr),
    Paren(ParenExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Assignment(AssignExpr),
    Call(CallExpr),
    /// Placeholder for an expression that failed to parse; lets statement-
    /// bounded recovery still hand the declaration driver a complete tree.
    Error(Span),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(e) => e.span,
            Expr::Name(e) => e.span,
            Expr::Paren(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Assignment(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Error(span) => *span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VarDeclStmt {
    pub is_read_only: bool,
    pub name: Symbol,
    pub name_span: Span,
    pub type_clause: Option<TypeClause>,
    pub init: Expr,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForStmt {
    pub var_name: Symbol,
    pub var_span: Span,
    pub lower: Expr,
    pub upper: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

/// One variant per statement production.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Block(Vec<Stmt>, Span),
    ExpressionStmt(Expr, Span),
    VarDecl(VarDeclStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Break(Span),
    Continue(Span),
    Return(ReturnStmt),
    /// A statement whose recovery already ran; carries no semantics.
    Error(Span),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Block(_, span) => *span,
            Stmt::ExpressionStmt(_, span) => *span,
            Stmt::VarDecl(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Break(span) => *span,
            Stmt::Continue(span) => *span,
            Stmt::Return(s) => s.span,
            Stmt::Error(span) => *span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: Symbol,
    pub name_span: Span,
    pub ty: TypeClause,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Symbol,
    pub name_span: Span,
    pub params: Vec<Param>,
    pub return_type: Option<TypeClause>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// A top-level declaration: either a function or a bare statement that
/// belongs to the implicit top-level block.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Statement(Stmt),
}

/// The whole parsed program.
pub type CompilationUnit = Vec<Declaration>;
