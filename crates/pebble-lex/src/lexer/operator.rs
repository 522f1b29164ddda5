//! Two-char operators, longest match first.

use crate::token::TokenKind;
use crate::Token;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::EqEq)
        } else {
            self.make(TokenKind::Eq)
        }
    }

    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::NotEq)
        } else {
            self.make(TokenKind::Bang)
        }
    }

    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::LtEq)
        } else {
            self.make(TokenKind::Lt)
        }
    }

    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::GtEq)
        } else {
            self.make(TokenKind::Gt)
        }
    }

    /// `&&` is the only legal two-char form; a lone `&` is a bad token.
    pub(crate) fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.make(TokenKind::AndAnd)
        } else {
            self.report_error(
                pebble_util::diagnostic::DiagnosticCode::E_LEXER_BAD_CHAR,
                "unexpected character '&'",
            );
            self.make(TokenKind::Bad)
        }
    }

    /// `||` is the only legal two-char form; a lone `|` is a bad token.
    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.make(TokenKind::OrOr)
        } else {
            self.report_error(
                pebble_util::diagnostic::DiagnosticCode::E_LEXER_BAD_CHAR,
                "unexpected character '|'",
            );
            self.make(TokenKind::Bad)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pebble_util::diagnostic::Handler;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(src, &mut handler);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            let done = tok.kind == TokenKind::Eof;
            out.push(tok.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn two_char_operators_are_longest_match() {
        assert_eq!(kinds("=="), vec![TokenKind::EqEq, TokenKind::Eof]);
        assert_eq!(kinds("!="), vec![TokenKind::NotEq, TokenKind::Eof]);
        assert_eq!(kinds("<="), vec![TokenKind::LtEq, TokenKind::Eof]);
        assert_eq!(kinds(">="), vec![TokenKind::GtEq, TokenKind::Eof]);
        assert_eq!(kinds("&&"), vec![TokenKind::AndAnd, TokenKind::Eof]);
        assert_eq!(kinds("||"), vec![TokenKind::OrOr, TokenKind::Eof]);
    }

    #[test]
    fn single_char_fallbacks() {
        assert_eq!(kinds("="), vec![TokenKind::Eq, TokenKind::Eof]);
        assert_eq!(kinds("!"), vec![TokenKind::Bang, TokenKind::Eof]);
        assert_eq!(kinds("<"), vec![TokenKind::Lt, TokenKind::Eof]);
        assert_eq!(kinds(">"), vec![TokenKind::Gt, TokenKind::Eof]);
    }

    #[test]
    fn lone_ampersand_or_pipe_is_bad() {
        assert_eq!(kinds("&"), vec![TokenKind::Bad, TokenKind::Eof]);
        assert_eq!(kinds("|"), vec![TokenKind::Bad, TokenKind::Eof]);
    }
}
