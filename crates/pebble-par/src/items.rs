//! `FunctionDecl := 'function' IDENT '(' ParamList? ')' TypeClause? Block`
//! plus the syntactic "last statement must be `return`" check.

use pebble_lex::TokenKind;
use pebble_util::diagnostic::DiagnosticCode;
use pebble_util::span::Span;

use crate::ast::{FunctionDecl, Param};
use crate::{PResult, Parser};

impl<'a> Parser<'a> {
    pub(crate) fn parse_function_decl(&mut self) -> PResult<FunctionDecl> {
        let start = self.advance().span; // 'function'
        let name_tok = self.expect(TokenKind::Ident, "a function name")?;

        self.expect(TokenKind::LParen, "'('")?;
        let mut params = Vec::new();
        if !self.at(TokenKind::RParen) {
            params.push(self.parse_param()?);
            while self.at(TokenKind::Comma) {
                self.advance();
                params.push(self.parse_param()?);
            }
        }
        self.expect(TokenKind::RParen, "')'")?;

        let return_type = self.parse_optional_type_clause()?;

        let (body, block_start, closing_brace_span) = self.parse_block_parts()?;
        let block_span = block_start.merge(closing_brace_span);

        self.check_body_ends_in_return(&body, closing_brace_span);

        Ok(FunctionDecl {
            name: name_tok.lexeme,
            name_span: name_tok.span,
            params,
            return_type,
            span: start.merge(block_span),
            body,
        })
    }

    /// `Param := IDENT TypeClause`
    fn parse_param(&mut self) -> PResult<Param> {
        let name_tok = self.expect(TokenKind::Ident, "a parameter name")?;
        let ty = self.parse_type_clause()?;
        Ok(Param {
            name: name_tok.lexeme,
            name_span: name_tok.span,
            ty,
        })
    }

    /// Additional rule: in a function body, the last statement must be a
    /// `return`. This is syntactic only — it does not reason about which
    /// branches of an `if` return. Diagnosed at the closing `}`, not at
    /// the offending statement, since the rule is about the shape of the
    /// whole body.
    fn check_body_ends_in_return(&self, body: &[crate::ast::Stmt], closing_brace_span: Span) {
        let ends_in_return = matches!(body.last(), Some(crate::ast::Stmt::Return(_)));
        if !ends_in_return {
            pebble_util::diagnostic::DiagnosticBuilder::error(
                "the last statement of a function body must be 'return'",
            )
            .span(closing_brace_span)
            .code(DiagnosticCode::E_PARSER_MISSING_TOKEN)
            .emit(self.handler);
        }
    }
}
