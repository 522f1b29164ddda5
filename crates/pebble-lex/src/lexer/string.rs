//! String literals: `""` inside a string is an escaped quote; a raw
//! newline or end-of-input before the closing `"` is an error.

use pebble_util::diagnostic::DiagnosticCode;
use pebble_util::symbol::Symbol;

use crate::token::{LiteralValue, Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_string(&mut self) -> Token {
        debug_assert_eq!(self.cursor.current_char(), '"');
        self.cursor.advance();

        let mut value = String::new();
        loop {
            if self.cursor.is_at_end() {
                self.report_error(
                    DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                    "unterminated string literal",
                );
                return Token::new(
                    TokenKind::Bad,
                    self.span(),
                    Symbol::intern(self.cursor.slice_from(self.token_start)),
                );
            }
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    if self.cursor.current_char() == '"' {
                        // `""` inside the string is an escaped quote.
                        value.push('"');
                        self.cursor.advance();
                    } else {
                        return Token::with_literal(
                            TokenKind::Str,
                            self.span(),
                            Symbol::intern(self.cursor.slice_from(self.token_start)),
                            LiteralValue::Str(Symbol::intern(&value)),
                        );
                    }
                }
                '\n' => {
                    self.report_error(
                        DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                        "unterminated string literal",
                    );
                    return Token::new(
                        TokenKind::Bad,
                        self.span(),
                        Symbol::intern(self.cursor.slice_from(self.token_start)),
                    );
                }
                c => {
                    value.push(c);
                    self.cursor.advance();
                }
            }
        }
    }
}
