//! pebble-par — syntactic analysis for the pebble language.
//!
//! [`Parser`] turns a token slice from `pebble-lex` into a [`ast::CompilationUnit`]
//! via precedence-climbing recursive descent. Parsing never
//! panics on malformed input: a failed `Consume` records a diagnostic and
//! unwinds to the nearest statement boundary via the internal [`Recover`]
//! signal, so one syntax error costs at most one top-level declaration.

pub mod ast;
mod expr;
mod items;
mod stmt;
mod types;

#[cfg(test)]
mod edge_cases;

use pebble_lex::{Token, TokenKind};
use pebble_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
use pebble_util::span::Span;

pub use ast::{CompilationUnit, Declaration};

/// Internal unwind signal raised when a required token is missing.
///
/// Carries no data: the diagnostic has already been emitted to the handler
/// by the time this is constructed. The only thing callers do with it is
/// propagate it with `?` until the declaration loop catches it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Recover;

pub(crate) type PResult<T> = Result<T, Recover>;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    handler: &'a Handler,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], handler: &'a Handler) -> Self {
        Self {
            tokens,
            pos: 0,
            handler,
        }
    }

    /// Parses an entire token stream into a compilation unit.
    ///
    /// Never fails: any declaration whose parse raises [`Recover`] is
    /// discarded and parsing resumes at the next declaration boundary.
    pub fn parse(&mut self) -> CompilationUnit {
        let mut decls = Vec::new();
        while !self.at(TokenKind::Eof) {
            match self.parse_declaration() {
                Ok(decl) => decls.push(decl),
                Err(Recover) => self.recover_to_semicolon(),
            }
        }
        decls
    }

    fn parse_declaration(&mut self) -> PResult<Declaration> {
        if self.at(TokenKind::Function) {
            self.parse_function_decl().map(Declaration::Function)
        } else {
            self.parse_statement().map(Declaration::Statement)
        }
    }

    /// Discards tokens through the next `;` (inclusive), or through `Eof`
    /// if none remains, then resumes at the following token.
    fn recover_to_semicolon(&mut self) {
        while !self.at(TokenKind::Eof) {
            let was_semicolon = self.at(TokenKind::Semicolon);
            self.advance();
            if was_semicolon {
                break;
            }
        }
    }

    // --- token-stream primitives, shared by expr/stmt/items/types -------

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = *self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of `kind`, or emits `E_PARSER_MISSING_TOKEN` and
    /// raises [`Recover`].
    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> PResult<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            let found = *self.current();
            self.error(
                DiagnosticCode::E_PARSER_MISSING_TOKEN,
                format!("expected {}, found '{}'", what, found.lexeme.as_str()),
            );
            Err(Recover)
        }
    }

    pub(crate) fn unexpected(&mut self, what: &str) -> Recover {
        let found = *self.current();
        self.error(
            DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN,
            format!("expected {}, found '{}'", what, found.lexeme.as_str()),
        );
        Recover
    }

    pub(crate) fn error(&self, code: DiagnosticCode, message: impl Into<String>) {
        DiagnosticBuilder::error(message)
            .span(self.current_span())
            .code(code)
            .emit(self.handler);
    }
}

/// Parses a whole program from source, running the lexer internally.
///
/// Convenience entry point mirroring `pebble_lex::tokenize` for callers
/// (the CLI driver, tests) that want lexing and parsing in one call.
pub fn parse_source(source: &str, handler: &Handler) -> CompilationUnit {
    let mut lex_handler = pebble_util::diagnostic::Handler::new();
    let tokens = pebble_lex::tokenize(source, &mut lex_handler);
    for diag in lex_handler.diagnostics() {
        handler.emit_diagnostic(diag);
    }
    let mut parser = Parser::new(&tokens, handler);
    parser.parse()
}
