//! Expression parsing implementation
//!
//! One method per precedence level, lowest precedence first. Each level
//! parses the next tighter-binding level, then loops consuming operators of
//! its own level, folding them into a left-leaning tree — so all binary
//! operators are left-associative.
//!
//! # Grammar
//!
//! ```text
//! expr       = equality
//! equality   = relational ( ("==" | "!=") relational )*
//! relational = add ( ("<" | "<=" | ">" | ">=") add )*
//! add        = mul ( ("+" | "-") mul )*
//! mul        = unary ( ("*" | "/") unary )*
//! unary      = ("+" | "-")? primary
//! primary    = num | "(" expr ")"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        self.parse_equality()
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_relational()?;

        loop {
            let span = self.current_span();
            let op = if self.match_token(&Token::EqEq(span)) {
                BinOp::Eq
            } else if self.match_token(&Token::NotEq(span)) {
                BinOp::Ne
            } else {
                break;
            };

            let right = Box::new(self.parse_relational()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                span,
            };
        }

        Ok(left)
    }

    /// Parse relational (< <= > >=)
    ///
    /// `>` and `>=` have no node kinds of their own: the operands are swapped
    /// and the node is built as `<` / `<=`.
    fn parse_relational(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            let span = self.current_span();
            if self.match_token(&Token::Lt(span)) {
                let right = Box::new(self.parse_additive()?);
                left = AstNode::BinaryOp {
                    op: BinOp::Lt,
                    left: Box::new(left),
                    right,
                    span,
                };
            } else if self.match_token(&Token::Le(span)) {
                let right = Box::new(self.parse_additive()?);
                left = AstNode::BinaryOp {
                    op: BinOp::Le,
                    left: Box::new(left),
                    right,
                    span,
                };
            } else if self.match_token(&Token::Gt(span)) {
                let right = self.parse_additive()?;
                left = AstNode::BinaryOp {
                    op: BinOp::Lt,
                    left: Box::new(right),
                    right: Box::new(left),
                    span,
                };
            } else if self.match_token(&Token::Ge(span)) {
                let right = self.parse_additive()?;
                left = AstNode::BinaryOp {
                    op: BinOp::Le,
                    left: Box::new(right),
                    right: Box::new(left),
                    span,
                };
            } else {
                break;
            }
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let span = self.current_span();
            let op = if self.match_token(&Token::Plus(span)) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(span)) {
                BinOp::Sub
            } else {
                break;
            };

            let right = Box::new(self.parse_multiplicative()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                span,
            };
        }

        Ok(left)
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let span = self.current_span();
            let op = if self.match_token(&Token::Star(span)) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash(span)) {
                BinOp::Div
            } else {
                break;
            };

            let right = Box::new(self.parse_unary()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                span,
            };
        }

        Ok(left)
    }

    /// Parse unary (+ -)
    fn parse_unary(&mut self) -> Result<AstNode, ParseError> {
        let span = self.current_span();

        if self.match_token(&Token::Plus(span)) {
            // Unary plus: just return the operand
            return self.parse_primary();
        }

        if self.match_token(&Token::Minus(span)) {
            // Unary minus: subtraction from a synthesized zero
            let operand = Box::new(self.parse_primary()?);
            return Ok(AstNode::BinaryOp {
                op: BinOp::Sub,
                left: Box::new(AstNode::IntLiteral(0, span)),
                right: operand,
                span,
            });
        }

        self.parse_primary()
    }

    /// Parse primary (number literals, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<AstNode, ParseError> {
        let span = self.current_span();

        if self.match_token(&Token::LParen(span)) {
            let expr = self.parse_expression()?;
            self.expect_token(
                &Token::RParen(self.current_span()),
                "Expected ')' after expression",
            )?;
            return Ok(expr);
        }

        if let Token::Num(n, span) = self.peek_token() {
            self.advance();
            return Ok(AstNode::IntLiteral(n, span));
        }

        Err(ParseError {
            message: format!("Expected a number, found {}", self.peek()),
            span,
        })
    }
}
