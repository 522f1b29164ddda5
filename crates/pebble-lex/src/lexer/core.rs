//! The `Lexer` struct: cursor-driven dispatch over the closed token set.

use pebble_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
use pebble_util::span::Span;
use pebble_util::symbol::Symbol;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scans a source string into tokens on demand.
///
/// `next_token` is the only entry point callers need; everything else here
/// is shared plumbing for the per-category lexing functions in the sibling
/// modules (`identifier`, `number`, `string`, `operator`).
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) handler: &'a mut Handler,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Scans and returns the next token, or `TokenKind::Eof` once the
    /// cursor has exhausted the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.make(TokenKind::Eof);
        }

        match self.cursor.current_char() {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            ':' => self.single(TokenKind::Colon),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '"' => self.lex_string(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.report_error(
                    DiagnosticCode::E_LEXER_BAD_CHAR,
                    format!("unexpected character '{}'", c),
                );
                self.cursor.advance();
                self.make(TokenKind::Bad)
            }
        }
    }

    /// Consumes exactly the current character and emits `kind` for it.
    pub(crate) fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make(kind)
    }

    /// Builds a token for `[token_start, cursor.position())` with no
    /// literal payload, interning the covered lexeme text.
    pub(crate) fn make(&self, kind: TokenKind) -> Token {
        let lexeme = self.cursor.slice_from(self.token_start);
        Token::new(kind, self.span(), Symbol::intern(lexeme))
    }

    pub(crate) fn span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        DiagnosticBuilder::error(message)
            .span(self.span())
            .code(code)
            .emit(self.handler);
    }

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char().is_whitespace() {
            self.cursor.advance();
        }
    }
}

/// Identifiers start with an ASCII letter or underscore (`letter
/// (letter|digit)*`; underscore is treated as a letter, matching common
/// practice for an `isalpha`-based scan).
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            None
        } else {
            Some(tok)
        }
    }
}
