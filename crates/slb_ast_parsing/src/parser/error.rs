use crate::lexer::LexingError;
use slb_tokens::spanned::{Span, Spanned};
use slb_tokens::token::{Token, TokenKind};
use std::num::ParseIntError;

/// A problem found while parsing.
///
/// Parse errors only ever abort the statement they occur in, they are collected and handed back
/// alongside the program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected next token to be `{expected}`, got `{}` instead", .found.kind())]
    ExpectedToken { expected: TokenKind, found: Token },
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger {
        literal: String,
        span: Span,
        #[source]
        source: ParseIntError,
    },
    #[error("no prefix builder for `{}` found", .0.kind())]
    NoPrefixBuilder(Token),
    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize, span: Span },
    #[error(transparent)]
    Lex(#[from] LexingError),
}

impl ParseError {
    pub fn expected_token(expected: TokenKind, found: &Token) -> Self {
        Self::ExpectedToken {
            expected,
            found: found.clone(),
        }
    }
}

impl Spanned for ParseError {
    fn span(&self) -> Span {
        match self {
            ParseError::ExpectedToken { found, .. } => found.span(),
            ParseError::InvalidInteger { span, .. } => *span,
            ParseError::NoPrefixBuilder(token) => token.span(),
            ParseError::TooDeep { span, .. } => *span,
            ParseError::Lex(e) => e.span(),
        }
    }
}
