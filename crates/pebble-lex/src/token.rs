//! Token kinds and the `Token` type produced by the lexer.

use pebble_util::span::Span;
use pebble_util::symbol::Symbol;

/// The closed set of lexical categories this language's lexer recognizes.
///
/// There is no open extension point here: every syntactic construct in the
/// grammar maps to exactly one of these kinds, so the parser can match on
/// `kind` exhaustively without a catch-all arm (aside from `Bad`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // One-char punctuators / operators.
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Comma,
    Semicolon,
    Eq,

    // Two-char operators (longest match).
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    AndAnd,
    OrOr,
    Bang,

    // Keywords.
    Var,
    Let,
    If,
    Else,
    While,
    For,
    To,
    Function,
    Break,
    Continue,
    Return,
    True,
    False,

    Ident,
    Number,
    Str,

    /// End-of-input sentinel; exactly one is emitted, at the input length.
    Eof,
    /// An unrecognized byte, or a literal that failed to scan cleanly.
    Bad,
}

/// The literal payload carried by `Number`, `Str`, `True` and `False` tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LiteralValue {
    Int(i32),
    Str(Symbol),
    Bool(bool),
}

/// A single lexical token: its kind, source span, and optional literal value.
///
/// `lexeme` is the interned source text of the token. For identifiers this is
/// the name; for everything else it is mostly useful for diagnostics and
/// tests, since the `kind` already disambiguates keywords and punctuation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub lexeme: Symbol,
    pub literal: Option<LiteralValue>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, lexeme: Symbol) -> Self {
        Self {
            kind,
            span,
            lexeme,
            literal: None,
        }
    }

    pub fn with_literal(kind: TokenKind, span: Span, lexeme: Symbol, literal: LiteralValue) -> Self {
        Self {
            kind,
            span,
            lexeme,
            literal: Some(literal),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Maps an interned identifier-shaped symbol to its keyword `TokenKind`,
/// or `None` if it is an ordinary identifier.
///
/// Driven off the reserved-symbol constants in [`pebble_util::symbol`] so
/// that adding a keyword only ever requires touching that module and this
/// match arm list, never the interner's probing logic.
pub fn keyword_kind(sym: Symbol) -> Option<TokenKind> {
    use pebble_util::symbol::*;

    if sym == KW_VAR {
        Some(TokenKind::Var)
    } else if sym == KW_LET {
        Some(TokenKind::Let)
    } else if sym == KW_IF {
        Some(TokenKind::If)
    } else if sym == KW_ELSE {
        Some(TokenKind::Else)
    } else if sym == KW_WHILE {
        Some(TokenKind::While)
    } else if sym == KW_FOR {
        Some(TokenKind::For)
    } else if sym == KW_TO {
        Some(TokenKind::To)
    } else if sym == KW_FUNCTION {
        Some(TokenKind::Function)
    } else if sym == KW_BREAK {
        Some(TokenKind::Break)
    } else if sym == KW_CONTINUE {
        Some(TokenKind::Continue)
    } else if sym == KW_RETURN {
        Some(TokenKind::Return)
    } else if sym == KW_TRUE {
        Some(TokenKind::True)
    } else if sym == KW_FALSE {
        Some(TokenKind::False)
    } else {
        None
    }
}
