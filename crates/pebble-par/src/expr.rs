//! Expression grammar: precedence encoded by layered productions
//! rather than a Pratt table, since the language has a fixed, small set of
//! binary operators and no user-defined precedence.

use pebble_lex::{LiteralValue, TokenKind};
use pebble_util::diagnostic::DiagnosticCode;

use crate::ast::{AssignExpr, BinaryExpr, BinaryOp, CallExpr, Expr, LiteralExpr, NameExpr, ParenExpr, UnaryExpr, UnaryOp};
use crate::{PResult, Parser};

impl<'a> Parser<'a> {
    pub(crate) fn parse_expression(&mut self) -> PResult<Expr> {
        self.parse_assignment()
    }

    /// `Assignment := IDENT '=' Assignment | LogicalOr`
    ///
    /// Parses a `LogicalOr` first; if it turns out to be a bare name
    /// immediately followed by `=`, re-interprets it as an assignment
    /// target instead of backtracking.
    fn parse_assignment(&mut self) -> PResult<Expr> {
        let expr = self.parse_or()?;
        if self.at(TokenKind::Eq) {
            self.advance();
            let value = self.parse_assignment()?;
            return match expr {
                Expr::Name(name) => {
                    let span = name.span.merge(value.span());
                    Ok(Expr::Assignment(AssignExpr {
                        name: name.name,
                        name_span: name.span,
                        value: Box::new(value),
                        span,
                    }))
                }
                _ => {
                    self.error(
                        DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN,
                        "left-hand side of an assignment must be a variable name",
                    );
                    Err(crate::Recover)
                }
            };
        }
        Ok(expr)
    }

    fn parse_or(&mut self) -> PResult<Expr> {
        let mut left = self.parse_and()?;
        while self.at(TokenKind::OrOr) {
            self.advance();
            let right = self.parse_and()?;
            left = binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> PResult<Expr> {
        let mut left = self.parse_equality()?;
        while self.at(TokenKind::AndAnd) {
            self.advance();
            let right = self.parse_equality()?;
            left = binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> PResult<Expr> {
        let mut left = self.parse_comparison()?;
        loop {
            let op = if self.at(TokenKind::EqEq) {
                BinaryOp::EqEq
            } else if self.at(TokenKind::NotEq) {
                BinaryOp::NotEq
            } else {
                break;
            };
            self.advance();
            let right = self.parse_comparison()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> PResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            let op = if self.at(TokenKind::Lt) {
                BinaryOp::Lt
            } else if self.at(TokenKind::LtEq) {
                BinaryOp::LtEq
            } else if self.at(TokenKind::Gt) {
                BinaryOp::Gt
            } else if self.at(TokenKind::GtEq) {
                BinaryOp::GtEq
            } else {
                break;
            };
            self.advance();
            let right = self.parse_term()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> PResult<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            let op = if self.at(TokenKind::Plus) {
                BinaryOp::Add
            } else if self.at(TokenKind::Minus) {
                BinaryOp::Sub
            } else {
                break;
            };
            self.advance();
            let right = self.parse_factor()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> PResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = if self.at(TokenKind::Star) {
                BinaryOp::Mul
            } else if self.at(TokenKind::Slash) {
                BinaryOp::Div
            } else {
                break;
            };
            self.advance();
            let right = self.parse_unary()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    /// `Unary := ('!'|'+'|'-') Unary | Primary` — right-associative.
    fn parse_unary(&mut self) -> PResult<Expr> {
        let op = if self.at(TokenKind::Bang) {
            Some(UnaryOp::Not)
        } else if self.at(TokenKind::Plus) {
            Some(UnaryOp::Plus)
        } else if self.at(TokenKind::Minus) {
            Some(UnaryOp::Negate)
        } else {
            None
        };
        match op {
            Some(op) => {
                let op_span = self.advance().span;
                let operand = self.parse_unary()?;
                let span = op_span.merge(operand.span());
                Ok(Expr::Unary(UnaryExpr {
                    op,
                    operand: Box::new(operand),
                    span,
                }))
            }
            None => self.parse_primary(),
        }
    }

    /// `Primary := '(' Expression ')' | Call | Name | Literal`
    fn parse_primary(&mut self) -> PResult<Expr> {
        match self.current().kind {
            TokenKind::LParen => {
                let start = self.advance().span;
                let inner = self.parse_expression()?;
                let end = self.expect(TokenKind::RParen, "')'")?.span;
                Ok(Expr::Paren(ParenExpr {
                    inner: Box::new(inner),
                    span: start.merge(end),
                }))
            }
            TokenKind::Ident => self.parse_name_or_call(),
            TokenKind::Number | TokenKind::Str | TokenKind::True | TokenKind::False => {
                let tok = self.advance();
                let value = tok.literal.expect("literal token always carries a value");
                Ok(Expr::Literal(LiteralExpr {
                    value,
                    span: tok.span,
                }))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// `Call := IDENT '(' (Expression (',' Expression)*)? ')'` or `Name := IDENT`.
    fn parse_name_or_call(&mut self) -> PResult<Expr> {
        let tok = self.expect(TokenKind::Ident, "an identifier")?;
        if !self.at(TokenKind::LParen) {
            return Ok(Expr::Name(NameExpr {
                name: tok.lexeme,
                span: tok.span,
            }));
        }
        self.advance();
        let mut args = Vec::new();
        if !self.at(TokenKind::RParen) {
            args.push(self.parse_expression()?);
            while self.at(TokenKind::Comma) {
                self.advance();
                args.push(self.parse_expression()?);
            }
        }
        let end = self.expect(TokenKind::RParen, "')'")?.span;
        Ok(Expr::Call(CallExpr {
            callee: tok.lexeme,
            callee_span: tok.span,
            args,
            span: tok.span.merge(end),
        }))
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span().merge(right.span());
    Expr::Binary(BinaryExpr {
        op,
        left: Box::new(left),
        right: Box::new(right),
        span,
    })
}
