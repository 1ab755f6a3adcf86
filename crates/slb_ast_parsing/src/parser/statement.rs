use crate::parser::{ParseError, Parser, Precedence};
use slb_ast::expr::{Expression, Identifier};
use slb_ast::statements::{AssignStatement, ExpressionStatement, ReturnStatement, Statement};
use slb_tokens::token::TokenKind;
use tracing::debug;

impl Parser<'_> {
    /// Parses the statement starting at `current`.
    ///
    /// Returns `None` when the statement was aborted, in which case `current` is left on the
    /// last token belonging to it.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        debug!("parsing statement at {:?}", self.current);
        match self.current.kind() {
            TokenKind::Let => self.parse_assign_statement().map(Statement::Assign),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => Some(Statement::Expression(self.parse_expression_statement())),
        }
    }

    /// `let <identifier> = <expression> [;]`
    fn parse_assign_statement(&mut self) -> Option<AssignStatement> {
        if !self.expect_following(TokenKind::Identifier) {
            self.synchronize();
            return None;
        }
        let name = Identifier::new(self.current.literal());
        if !self.expect_following(TokenKind::Assign) {
            self.synchronize();
            return None;
        }
        self.advance();
        let value = self.parse_value()?;
        self.skip_terminator();
        Some(AssignStatement::new(name, value))
    }

    /// `return [<expression>] [;]`
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        if self.following.is(TokenKind::Eof) {
            return Some(ReturnStatement::new(None));
        }
        if self.following.is(TokenKind::SemiColon) {
            self.advance();
            return Some(ReturnStatement::new(None));
        }
        self.advance();
        let value = self.parse_value()?;
        self.skip_terminator();
        Some(ReturnStatement::new(value))
    }

    /// `<expression> [;]`
    fn parse_expression_statement(&mut self) -> ExpressionStatement {
        let value = self.parse_reported_expression();
        self.skip_terminator();
        ExpressionStatement::new(value)
    }

    /// Parses the value of an assignment or return, skipping the rest of the statement if it
    /// can not be built
    fn parse_value(&mut self) -> Option<Expression> {
        let value = self.parse_reported_expression();
        if value.is_none() {
            self.synchronize();
        }
        value
    }

    /// Parses an expression at the lowest precedence, making sure a missing expression leaves
    /// an error behind
    fn parse_reported_expression(&mut self) -> Option<Expression> {
        let reported = self.errors.len();
        let expression = self.parse_expression(Precedence::Lowest);
        if expression.is_none() && self.errors.len() == reported {
            self.report(ParseError::NoPrefixBuilder(self.current.clone()));
        }
        expression
    }
}
