//! `TypeClause := ':' IDENT` — the only type syntax this grammar has.

use pebble_lex::TokenKind;

use crate::ast::TypeClause;
use crate::{PResult, Parser};

impl<'a> Parser<'a> {
    /// Parses a mandatory `: IDENT` clause, as required after a `Param`.
    pub(crate) fn parse_type_clause(&mut self) -> PResult<TypeClause> {
        self.expect(TokenKind::Colon, "':'")?;
        let name_tok = self.expect(TokenKind::Ident, "a type name")?;
        Ok(TypeClause {
            name: name_tok.lexeme,
            span: name_tok.span,
        })
    }

    /// Parses an optional `: IDENT` clause, used after a `VarDecl`'s name
    /// where the type can instead be inferred from the initializer.
    pub(crate) fn parse_optional_type_clause(&mut self) -> PResult<Option<TypeClause>> {
        if self.at(TokenKind::Colon) {
            self.parse_type_clause().map(Some)
        } else {
            Ok(None)
        }
    }
}
