//! Identifiers and the fixed keyword set.

use pebble_util::symbol::Symbol;

use crate::token::{keyword_kind, LiteralValue, Token, TokenKind};

use super::core::{is_ident_continue, is_ident_start, Lexer};

impl<'a> Lexer<'a> {
    /// `letter (letter|digit)*`; if the interned text names a keyword,
    /// emit the keyword's kind (and, for `true`/`false`, its literal
    /// value), otherwise emit a plain `Ident`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        debug_assert!(is_ident_start(self.cursor.current_char()));
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let sym = Symbol::intern_known(text);

        match keyword_kind(sym) {
            Some(TokenKind::True) => {
                Token::with_literal(TokenKind::True, self.span(), sym, LiteralValue::Bool(true))
            }
            Some(TokenKind::False) => {
                Token::with_literal(TokenKind::False, self.span(), sym, LiteralValue::Bool(false))
            }
            Some(kind) => Token::new(kind, self.span(), sym),
            None => Token::new(TokenKind::Ident, self.span(), sym),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pebble_util::diagnostic::Handler;

    fn scan_one(src: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(src, &mut handler);
        lexer.next_token()
    }

    #[test]
    fn plain_identifier() {
        let tok = scan_one("total_count");
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.lexeme.as_str(), "total_count");
    }

    #[test]
    fn keyword_is_distinguished_from_identifier() {
        assert_eq!(scan_one("function").kind, TokenKind::Function);
        assert_eq!(scan_one("functiona").kind, TokenKind::Ident);
        assert_eq!(scan_one("while").kind, TokenKind::While);
        assert_eq!(scan_one("to").kind, TokenKind::To);
    }

    #[test]
    fn true_and_false_carry_bool_literals() {
        let t = scan_one("true");
        assert_eq!(t.kind, TokenKind::True);
        assert_eq!(t.literal, Some(LiteralValue::Bool(true)));

        let f = scan_one("false");
        assert_eq!(f.kind, TokenKind::False);
        assert_eq!(f.literal, Some(LiteralValue::Bool(false)));
    }
}
