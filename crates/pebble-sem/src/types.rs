//! The closed five-type set, operator resolution tables, and the
//! conversion classifier.
//!
//! Both tables are plain `match` statements over `(op, operand type(s))`
//! rather than a runtime-built `HashMap`: the grammar's operator set is
//! fixed and small, so the match compiles to a jump table that is a
//! table read in everything but syntax.

use std::fmt;

use pebble_par::ast::{BinaryOp, UnaryOp};
use pebble_util::symbol::{Symbol, TY_BOOL, TY_INT, TY_STRING, TY_VOID};

/// The five types this language's type system knows about.
///
/// `Void` never labels a value, only an expression's type (a call to a
/// function with no meaningful result). `Error` is the binder's internal
/// "unresolved" marker, used to suppress cascading diagnostics once the
/// root cause of a type error has already been reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Bool,
    String,
    Void,
    Error,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Bool => "bool",
            Type::String => "string",
            Type::Void => "void",
            Type::Error => "error",
        }
    }

    /// Resolves a type-clause identifier (`int`, `bool`, `string`, `void`)
    /// to its `Type`. Any other identifier is not a type name.
    pub fn from_symbol(sym: Symbol) -> Option<Type> {
        if sym == TY_INT {
            Some(Type::Int)
        } else if sym == TY_BOOL {
            Some(Type::Bool)
        } else if sym == TY_STRING {
            Some(Type::String)
        } else if sym == TY_VOID {
            Some(Type::Void)
        } else {
            None
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of classifying a conversion from one type to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    /// No conversion exists between the two types.
    None,
    /// `from == to`; the expression passes through unchanged.
    Identity,
    /// Reserved: no pair of types in this language currently classifies
    /// as implicit. Kept so the four-way result stays exhaustive and
    /// matches the conversion table this binder is grounded on.
    Implicit,
    /// Requires an explicit cast syntax (`int(x)`, `bool(x)`, `string(x)`).
    Explicit,
}

/// `classify(from, to)`: `int`/`bool` convert to `string` and
/// back only through an explicit cast; every other pair is unrelated.
pub fn classify(from: Type, to: Type) -> Conversion {
    if from == to {
        return Conversion::Identity;
    }
    match (from, to) {
        (Type::Int, Type::String) | (Type::Bool, Type::String) => Conversion::Explicit,
        (Type::String, Type::Int) | (Type::String, Type::Bool) => Conversion::Explicit,
        _ => Conversion::None,
    }
}

/// The bound kind a unary operator resolves to once its operand type is
/// known — distinct from [`UnaryOp`], which only records the syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundUnaryOp {
    Identity,
    Negation,
    LogicalNegation,
}

/// Unary operator table (exhaustive): `(syntactic kind, operand
/// type) -> (bound kind, result type)`.
pub fn resolve_unary(op: UnaryOp, operand: Type) -> Option<(BoundUnaryOp, Type)> {
    match (op, operand) {
        (UnaryOp::Not, Type::Bool) => Some((BoundUnaryOp::LogicalNegation, Type::Bool)),
        (UnaryOp::Plus, Type::Int) => Some((BoundUnaryOp::Identity, Type::Int)),
        (UnaryOp::Negate, Type::Int) => Some((BoundUnaryOp::Negation, Type::Int)),
        _ => None,
    }
}

/// The bound kind a binary operator resolves to once both operand types
/// are known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundBinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    And,
    Or,
    /// `string + string`, distinct from `Add` because the evaluator's
    /// dispatch differs (concatenation, not arithmetic).
    Concat,
}

/// Binary operator table (exhaustive): lookup is by exact
/// triple `(syntactic kind, left type, right type)`.
pub fn resolve_binary(op: BinaryOp, left: Type, right: Type) -> Option<(BoundBinaryOp, Type)> {
    use BinaryOp::*;
    use Type::*;
    match (op, left, right) {
        (Add, Int, Int) => Some((BoundBinaryOp::Add, Int)),
        (Sub, Int, Int) => Some((BoundBinaryOp::Sub, Int)),
        (Mul, Int, Int) => Some((BoundBinaryOp::Mul, Int)),
        (Div, Int, Int) => Some((BoundBinaryOp::Div, Int)),
        (Lt, Int, Int) => Some((BoundBinaryOp::Lt, Bool)),
        (LtEq, Int, Int) => Some((BoundBinaryOp::LtEq, Bool)),
        (Gt, Int, Int) => Some((BoundBinaryOp::Gt, Bool)),
        (GtEq, Int, Int) => Some((BoundBinaryOp::GtEq, Bool)),
        (EqEq, Int, Int) | (EqEq, Bool, Bool) | (EqEq, String, String) => {
            Some((BoundBinaryOp::Eq, Bool))
        }
        (NotEq, Int, Int) | (NotEq, Bool, Bool) | (NotEq, String, String) => {
            Some((BoundBinaryOp::NotEq, Bool))
        }
        (And, Bool, Bool) => Some((BoundBinaryOp::And, Bool)),
        (Or, Bool, Bool) => Some((BoundBinaryOp::Or, Bool)),
        (Add, String, String) => Some((BoundBinaryOp::Concat, String)),
        _ => None,
    }
}
