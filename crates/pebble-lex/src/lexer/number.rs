//! Decimal integer literals: a number literal that does not fit a 32-bit
//! signed integer is a diagnosed error, not a panic.

use pebble_util::diagnostic::DiagnosticCode;

use crate::token::{LiteralValue, Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self) -> Token {
        debug_assert!(self.cursor.current_char().is_ascii_digit());
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        match text.parse::<i32>() {
            Ok(value) => Token::with_literal(
                TokenKind::Number,
                self.span(),
                pebble_util::symbol::Symbol::intern(text),
                LiteralValue::Int(value),
            ),
            Err(_) => {
                self.report_error(
                    DiagnosticCode::E_LEXER_BAD_NUMBER,
                    format!("numeric literal '{}' does not fit in a 32-bit signed integer", text),
                );
                Token::new(
                    TokenKind::Bad,
                    self.span(),
                    pebble_util::symbol::Symbol::intern(text),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pebble_util::diagnostic::Handler;

    fn scan_one(src: &str) -> (Token, Handler) {
        let mut handler = Handler::new();
        let tok = {
            let mut lexer = Lexer::new(src, &mut handler);
            lexer.next_token()
        };
        (tok, handler)
    }

    #[test]
    fn decimal_literal() {
        let (tok, handler) = scan_one("12345");
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.literal, Some(LiteralValue::Int(12345)));
        assert!(!handler.has_errors());
    }

    #[test]
    fn max_i32_round_trips() {
        let (tok, _) = scan_one("2147483647");
        assert_eq!(tok.literal, Some(LiteralValue::Int(i32::MAX)));
    }

    #[test]
    fn overflowing_literal_is_a_diagnosed_bad_token() {
        let (tok, handler) = scan_one("99999999999999");
        assert_eq!(tok.kind, TokenKind::Bad);
        assert_eq!(handler.error_count(), 1);
    }
}
