//! Builds the abstract syntax tree from the lexer's tokens

use crate::lexer::{Lexer, LexingError};
use slb_ast::program::Program;
use slb_tokens::spanned::Span;
use slb_tokens::token::{Token, TokenKind};
use tracing::{debug, trace};

mod error;
mod expr;
mod precedence;
mod statement;

pub use error::ParseError;
pub use expr::MAX_EXPRESSION_DEPTH;
pub use precedence::Precedence;

/// Creates the syntax tree of a program from a [Lexer].
///
/// The parser looks at most two tokens ahead, `current` and `following`. It never stops early:
/// a statement that can not be built is dropped, the problem is recorded, and parsing picks up
/// again at the next token.
///
/// # Examples
/// ```
/// # use slb_ast_parsing::lexer::Lexer;
/// # use slb_ast_parsing::parser::Parser;
/// let parser = Parser::new(Lexer::new("let x = 5;\nx"));
/// let (program, errors) = parser.parse_program();
/// assert_eq!(program.statements.len(), 2);
/// assert!(errors.is_empty());
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    following: Token,
    /// lexing problems of `following`, reported once it becomes `current`
    pending: Vec<LexingError>,
    errors: Vec<ParseError>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser with a given lexer
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::eof(Span::default()),
            following: Token::eof(Span::default()),
            pending: vec![],
            errors: vec![],
            depth: 0,
        };
        parser.advance();
        parser.advance();
        parser
    }

    /// Parses statements until the end of input.
    ///
    /// Returns the program along with every problem found, in the order they were found. A
    /// non-empty error list means the program may be missing statements the source has.
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut program = Program::default();
        while !self.current.is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                trace!("parsed statement {statement}");
                program.statements.push(statement);
            }
            self.advance();
        }
        for error in std::mem::take(&mut self.pending) {
            self.report(error.into());
        }
        debug!(
            "parsed {} statements with {} errors",
            program.len(),
            self.errors.len()
        );
        (program, self.errors)
    }

    /// The problems found so far
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Shifts `following` into `current` and pulls a new token from the lexer.
    ///
    /// Lexing problems are reported as their token becomes `current`, keeping errors in source
    /// order.
    fn advance(&mut self) {
        for error in std::mem::take(&mut self.pending) {
            self.report(error.into());
        }
        let next = self.lexer.next_token();
        self.pending = self.lexer.take_errors();
        self.current = std::mem::replace(&mut self.following, next);
        trace!(
            "advanced, current={:?} following={:?}",
            self.current,
            self.following
        );
    }

    /// Advances if `following` is of `kind`, otherwise records an error
    fn expect_following(&mut self, kind: TokenKind) -> bool {
        if self.following.is(kind) {
            self.advance();
            true
        } else {
            self.report(ParseError::expected_token(kind, &self.following));
            false
        }
    }

    /// Advances past `;` if it comes next, statement terminators are optional
    fn skip_terminator(&mut self) {
        if self.following.is(TokenKind::SemiColon) {
            self.advance();
        }
    }

    /// Advances until `current` is the `;` ending this statement, the end of input, or the last
    /// token before a keyword starting the next statement
    fn synchronize(&mut self) {
        while !self.current.is(TokenKind::SemiColon)
            && !self.current.is(TokenKind::Eof)
            && !self.following.is(TokenKind::Let)
            && !self.following.is(TokenKind::Return)
        {
            self.advance();
        }
    }

    fn report(&mut self, error: ParseError) {
        debug!("parse error: {error}");
        self.errors.push(error);
    }
}

impl<'a> From<Lexer<'a>> for Parser<'a> {
    fn from(value: Lexer<'a>) -> Self {
        Self::new(value)
    }
}
