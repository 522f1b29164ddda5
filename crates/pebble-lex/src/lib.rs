//! pebble-lex — lexical analysis for the pebble language.
//!
//! A single-pass scanner ([`lexer::Lexer`]) turns source text into a flat
//! token stream ([`token::Token`]). Whitespace is skipped internally and
//! never reaches the parser; the stream always ends with exactly one
//! [`token::TokenKind::Eof`] token positioned at the input's byte length.
//!
//! Diagnostics (bad character, unterminated string, numeric overflow) are
//! reported through [`pebble_util::diagnostic::Handler`] as scanning
//! continues — the lexer never aborts on a single bad byte.

pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{LiteralValue, Token, TokenKind};

/// Tokenizes an entire source string, returning every token including the
/// trailing [`TokenKind::Eof`].
///
/// Convenience wrapper around [`Lexer::next_token`] for callers (tests,
/// the CLI driver) that want the whole stream at once rather than pulling
/// tokens one at a time.
pub fn tokenize(source: &str, handler: &mut pebble_util::diagnostic::Handler) -> Vec<Token> {
    let mut lexer = Lexer::new(source, handler);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let is_eof = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if is_eof {
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pebble_util::diagnostic::Handler;

    #[test]
    fn empty_input_yields_only_eof() {
        let mut handler = Handler::new();
        let tokens = tokenize("", &mut handler);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert!(!handler.has_errors());
    }

    #[test]
    fn eof_is_positioned_at_input_length() {
        let mut handler = Handler::new();
        let tokens = tokenize("  x  ", &mut handler);
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.span.start, 5);
    }
}
