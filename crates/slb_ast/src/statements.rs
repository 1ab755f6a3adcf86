//! Statements

use crate::expr::{Expression, Identifier};
use slb_tokens::token::TokenKind;
use std::fmt::{Display, Formatter};

/// A statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign(AssignStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    /// The literal of the token this statement starts with
    pub fn token_literal(&self) -> String {
        match self {
            Statement::Assign(_) => TokenKind::Let.to_string(),
            Statement::Return(_) => TokenKind::Return.to_string(),
            Statement::Expression(stmt) => stmt
                .value
                .as_ref()
                .map(Expression::token_literal)
                .unwrap_or_default(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Assign(stmt) => stmt.fmt(f),
            Statement::Return(stmt) => stmt.fmt(f),
            Statement::Expression(stmt) => stmt.fmt(f),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStatement {
    pub name: Identifier,
    pub value: Expression,
}

impl AssignStatement {
    pub fn new(name: Identifier, value: impl Into<Expression>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl Display for AssignStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", TokenKind::Let, self.name, self.value)
    }
}

/// `return [<value>];`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
}

impl ReturnStatement {
    pub fn new(value: impl Into<Option<Expression>>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", TokenKind::Return, value),
            None => write!(f, "{};", TokenKind::Return),
        }
    }
}

/// An expression on its own.
///
/// `value` is absent when the expression could not be built, the statement still marks where it
/// was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub value: Option<Expression>,
}

impl ExpressionStatement {
    pub fn new(value: impl Into<Option<Expression>>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}
