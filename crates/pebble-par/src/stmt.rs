//! Statement grammar: block, var-decl, if/while/for,
//! break/continue/return, and bare expression statements.

use pebble_lex::TokenKind;
use pebble_util::span::Span;

use crate::ast::{ForStmt, IfStmt, ReturnStmt, Stmt, VarDeclStmt, WhileStmt};
use crate::{PResult, Parser};

impl<'a> Parser<'a> {
    /// `Statement := Block | If | While | For | Break | Continue | Return
    ///             | VarDecl | ExpressionStmt`
    pub(crate) fn parse_statement(&mut self) -> PResult<Stmt> {
        match self.current().kind {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Break => self.parse_break(),
            TokenKind::Continue => self.parse_continue(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Var | TokenKind::Let => self.parse_var_decl(),
            _ => self.parse_expression_stmt(),
        }
    }

    /// `Block := '{' Statement* '}'`
    pub(crate) fn parse_block(&mut self) -> PResult<Stmt> {
        let (stmts, start, end) = self.parse_block_parts()?;
        Ok(Stmt::Block(stmts, start.merge(end)))
    }

    /// Same grammar as [`Parser::parse_block`], but also hands back the
    /// closing `}`'s own span so callers that need to point a diagnostic
    /// at the end of the block don't have to re-derive it from the
    /// merged block span (whose line/column is the opening `{`'s).
    pub(crate) fn parse_block_parts(&mut self) -> PResult<(Vec<Stmt>, Span, Span)> {
        let start = self.expect(TokenKind::LBrace, "'{'")?.span;
        let mut stmts = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            stmts.push(self.parse_statement()?);
        }
        let end = self.expect(TokenKind::RBrace, "'}'")?.span;
        Ok((stmts, start, end))
    }

    /// `VarDecl := ('var'|'let') IDENT TypeClause? '=' Expression ';'`
    fn parse_var_decl(&mut self) -> PResult<Stmt> {
        let kw = self.advance();
        let is_read_only = kw.kind == TokenKind::Let;
        let name_tok = self.expect(TokenKind::Ident, "a variable name")?;
        let type_clause = self.parse_optional_type_clause()?;
        self.expect(TokenKind::Eq, "'='")?;
        let init = self.parse_expression()?;
        let end = self.expect(TokenKind::Semicolon, "';'")?.span;
        Ok(Stmt::VarDecl(VarDeclStmt {
            is_read_only,
            name: name_tok.lexeme,
            name_span: name_tok.span,
            type_clause,
            init,
            span: kw.span.merge(end),
        }))
    }

    /// `If := 'if' '(' Expression ')' Statement ('else' Statement)?`
    fn parse_if(&mut self) -> PResult<Stmt> {
        let start = self.advance().span;
        self.expect(TokenKind::LParen, "'('")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        let then_branch = Box::new(self.parse_statement()?);
        let mut span = start.merge(then_branch.span());
        let else_branch = if self.at(TokenKind::Else) {
            self.advance();
            let else_stmt = Box::new(self.parse_statement()?);
            span = span.merge(else_stmt.span());
            Some(else_stmt)
        } else {
            None
        };
        Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
            span,
        }))
    }

    /// `While := 'while' '(' Expression ')' Statement`
    fn parse_while(&mut self) -> PResult<Stmt> {
        let start = self.advance().span;
        self.expect(TokenKind::LParen, "'('")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        let body = Box::new(self.parse_statement()?);
        let span = start.merge(body.span());
        Ok(Stmt::While(WhileStmt {
            condition,
            body,
            span,
        }))
    }

    /// `For := 'for' IDENT '=' Expression 'to' Expression Statement`
    fn parse_for(&mut self) -> PResult<Stmt> {
        let start = self.advance().span;
        let var_tok = self.expect(TokenKind::Ident, "a loop variable name")?;
        self.expect(TokenKind::Eq, "'='")?;
        let lower = self.parse_expression()?;
        self.expect(TokenKind::To, "'to'")?;
        let upper = self.parse_expression()?;
        let body = Box::new(self.parse_statement()?);
        let span = start.merge(body.span());
        Ok(Stmt::For(ForStmt {
            var_name: var_tok.lexeme,
            var_span: var_tok.span,
            lower,
            upper,
            body,
            span,
        }))
    }

    /// `Break := 'break' ';'`
    fn parse_break(&mut self) -> PResult<Stmt> {
        let start = self.advance().span;
        let end = self.expect(TokenKind::Semicolon, "';'")?.span;
        Ok(Stmt::Break(start.merge(end)))
    }

    /// `Continue := 'continue' ';'`
    fn parse_continue(&mut self) -> PResult<Stmt> {
        let start = self.advance().span;
        let end = self.expect(TokenKind::Semicolon, "';'")?.span;
        Ok(Stmt::Continue(start.merge(end)))
    }

    /// `Return := 'return' Expression ';'`
    fn parse_return(&mut self) -> PResult<Stmt> {
        let start = self.advance().span;
        let value = self.parse_expression()?;
        let end = self.expect(TokenKind::Semicolon, "';'")?.span;
        Ok(Stmt::Return(ReturnStmt {
            value,
            span: start.merge(end),
        }))
    }

    /// `ExpressionStmt := Expression ';'`
    fn parse_expression_stmt(&mut self) -> PResult<Stmt> {
        let expr = self.parse_expression()?;
        let end = self.expect(TokenKind::Semicolon, "';'")?.span;
        let span = expr.span().merge(end);
        Ok(Stmt::ExpressionStmt(expr, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pebble_util::diagnostic::Handler;

    fn parse_stmt(src: &str) -> (Stmt, Handler) {
        let handler = Handler::new();
        let mut lex_handler = Handler::new();
        let tokens = pebble_lex::tokenize(src, &mut lex_handler);
        let mut parser = Parser::new(&tokens, &handler);
        let stmt = parser.parse_statement().expect("expected a valid statement");
        (stmt, handler)
    }

    #[test]
    fn var_decl_with_explicit_type() {
        let (stmt, handler) = parse_stmt("var x:int = 1;");
        assert!(!handler.has_errors());
        match stmt {
            Stmt::VarDecl(decl) => {
                assert!(!decl.is_read_only);
                assert!(decl.type_clause.is_some());
            }
            other => panic!("expected a var decl, got {:?}", other),
        }
    }

    #[test]
    fn let_decl_is_read_only_and_type_is_optional() {
        let (stmt, handler) = parse_stmt("let y = 2;");
        assert!(!handler.has_errors());
        match stmt {
            Stmt::VarDecl(decl) => {
                assert!(decl.is_read_only);
                assert!(decl.type_clause.is_none());
            }
            other => panic!("expected a var decl, got {:?}", other),
        }
    }

    #[test]
    fn if_without_else() {
        let (stmt, handler) = parse_stmt("if (x < 1) { return x; }");
        assert!(!handler.has_errors());
        match stmt {
            Stmt::If(s) => assert!(s.else_branch.is_none()),
            other => panic!("expected an if, got {:?}", other),
        }
    }

    #[test]
    fn if_with_else() {
        let (stmt, _) = parse_stmt("if (x < 1) { return x; } else { return 0; }");
        match stmt {
            Stmt::If(s) => assert!(s.else_branch.is_some()),
            other => panic!("expected an if, got {:?}", other),
        }
    }

    #[test]
    fn for_loop_shape() {
        let (stmt, handler) = parse_stmt("for i = 1 to 10 { print(string(i)); }");
        assert!(!handler.has_errors());
        assert!(matches!(stmt, Stmt::For(_)));
    }

    #[test]
    fn nested_block_scoping_parses() {
        let (stmt, handler) = parse_stmt("{ var x:int = 1; { var x:int = 2; } }");
        assert!(!handler.has_errors());
        match stmt {
            Stmt::Block(stmts, _) => assert_eq!(stmts.len(), 2),
            other => panic!("expected a block, got {:?}", other),
        }
    }
}
