//! Expressions are built by precedence climbing over two builder tables.
//!
//! A prefix builder starts an expression from the token it begins with, an infix builder extends
//! an already built left hand side with the operator that follows it. New expression forms are
//! added by registering a builder in [Parser::prefix_builder] or [Parser::infix_builder] and
//! ranking the operator in [Precedence::of], the loop in [Parser::parse_expression] stays as is.

use crate::parser::{ParseError, Parser, Precedence};
use slb_ast::expr::{Expression, Identifier, IntegerLiteral};
use slb_tokens::spanned::Spanned;
use slb_tokens::token::TokenKind;
use tracing::trace;

/// How deeply expressions may nest before the parser refuses to recurse any further
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// Builds an expression starting at `current`
pub(super) type PrefixBuilder<'a> = fn(&mut Parser<'a>) -> Option<Expression>;
/// Extends the given left hand side with the operator at `current`
pub(super) type InfixBuilder<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

impl<'a> Parser<'a> {
    /// Parses an expression starting at `current`, absorbing every following operator that binds
    /// tighter than `precedence`.
    ///
    /// Returns `None` if no expression can start at `current`. No error is recorded for that
    /// here, callers decide whether a missing expression is a problem.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            self.report(ParseError::TooDeep {
                limit: MAX_EXPRESSION_DEPTH,
                span: self.current.span(),
            });
            return None;
        }
        self.depth += 1;
        let expression = self.climb(precedence);
        self.depth -= 1;
        expression
    }

    fn climb(&mut self, precedence: Precedence) -> Option<Expression> {
        let prefix = Self::prefix_builder(self.current.kind())?;
        let mut left = prefix(self)?;
        while precedence < Precedence::of(self.following.kind()) {
            let Some(infix) = Self::infix_builder(self.following.kind()) else {
                break;
            };
            self.advance();
            left = infix(self, left)?;
        }
        trace!("built expression {left}");
        Some(left)
    }

    /// The builder for expressions starting with a token of `kind`
    pub(super) fn prefix_builder(kind: TokenKind) -> Option<PrefixBuilder<'a>> {
        match kind {
            TokenKind::Identifier => Some(Self::parse_identifier),
            TokenKind::Integer => Some(Self::parse_integer),
            _ => None,
        }
    }

    /// The builder for operators of `kind` following an expression.
    ///
    /// No infix operators are part of the grammar yet.
    pub(super) fn infix_builder(_kind: TokenKind) -> Option<InfixBuilder<'a>> {
        None
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Identifier::new(self.current.literal()).into())
    }

    fn parse_integer(&mut self) -> Option<Expression> {
        match self.current.literal().parse::<i64>() {
            Ok(value) => Some(IntegerLiteral::new(value).into()),
            Err(source) => {
                self.report(ParseError::InvalidInteger {
                    literal: self.current.literal().to_string(),
                    span: self.current.span(),
                    source,
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::tests::parse_err;
    use slb_ast::statements::{ExpressionStatement, Statement};
    use test_log::test;

    #[test]
    fn test_prefix_table() {
        assert!(Parser::prefix_builder(TokenKind::Identifier).is_some());
        assert!(Parser::prefix_builder(TokenKind::Integer).is_some());
        assert!(Parser::prefix_builder(TokenKind::Float).is_none());
        assert!(Parser::prefix_builder(TokenKind::SemiColon).is_none());
    }

    #[test]
    fn test_operators_are_not_absorbed_without_builders() {
        let mut parser = Parser::new(Lexer::new("a + b"));
        let expression = parser.parse_expression(Precedence::Lowest);
        assert_eq!(expression, Some(Expression::from(Identifier::new("a"))));
        assert_eq!(parser.current.kind(), TokenKind::Identifier);
        assert_eq!(parser.following.kind(), TokenKind::Plus);
    }

    #[test]
    fn test_max_i64() {
        let (program, errors) = parse_err("9223372036854775807");
        assert!(errors.is_empty());
        assert_eq!(program.to_string(), i64::MAX.to_string());
    }

    #[test]
    fn test_out_of_range_integer() {
        let (program, errors) = parse_err("9223372036854775808;");
        assert_eq!(
            errors,
            vec!["could not parse \"9223372036854775808\" as integer"]
        );
        assert_eq!(
            program.statements,
            vec![Statement::Expression(ExpressionStatement::new(None))]
        );
    }

    #[test]
    fn test_nesting_is_bounded() {
        let mut parser = Parser::new(Lexer::new("x"));
        parser.depth = MAX_EXPRESSION_DEPTH;
        assert_eq!(parser.parse_expression(Precedence::Lowest), None);
        assert!(matches!(
            parser.errors(),
            [ParseError::TooDeep {
                limit: MAX_EXPRESSION_DEPTH,
                ..
            }]
        ));
        assert_eq!(parser.depth, MAX_EXPRESSION_DEPTH);
    }

    #[test]
    fn test_depth_is_restored() {
        let mut parser = Parser::new(Lexer::new("x"));
        parser.parse_expression(Precedence::Lowest);
        assert_eq!(parser.depth, 0);
    }
}
