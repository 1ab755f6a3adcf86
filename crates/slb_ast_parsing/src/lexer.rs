//! Responsible with converting a source buffer into tokens, one at a time
//!
//! The lexer is byte oriented and only understands ASCII. Any byte outside of the language's
//! vocabulary, including every byte of a multi-byte UTF-8 sequence, becomes its own
//! [TokenKind::Illegal] token.

use crate::lexer::token_parsing::{parse_token, Lexeme};
use slb_tokens::spanned::{Span, Spanned};
use slb_tokens::token::{Token, TokenKind};
use thiserror::Error;
use tracing::{error, trace};

mod token_parsing;

/// Responsible with converting a source buffer into tokens, one at a time
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a [u8],
    offset: usize,
    exhausted: bool,
    errors: Vec<LexingError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the whole of `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            offset: 0,
            exhausted: false,
            errors: vec![],
        }
    }

    /// Gets the next token.
    ///
    /// Once the source is exhausted this keeps returning an [TokenKind::Eof] token.
    pub fn next_token(&mut self) -> Token {
        if self.exhausted {
            return Token::eof(Span::new(self.source.len(), 0));
        }
        let source = self.source;
        let rest = &source[self.offset..];
        match parse_token(rest) {
            Ok((_, (skipped, len, lexeme))) => {
                let span = Span::new(self.offset + skipped, len);
                self.offset += skipped + len;
                let token = self.make_token(lexeme, span);
                trace!("lexed {token:?} at {span}");
                token
            }
            Err(e) => {
                // every byte is at least an illegal token, so this is only reached on a broken
                // recognizer
                error!("could not recognize a token at offset {}: {e:?}", self.offset);
                self.exhausted = true;
                Token::eof(Span::new(self.source.len(), 0))
            }
        }
    }

    fn make_token(&mut self, lexeme: Lexeme<'_>, span: Span) -> Token {
        let literal = match lexeme.kind {
            TokenKind::Illegal => lexeme.literal.iter().copied().map(char::from).collect(),
            _ => String::from_utf8_lossy(lexeme.literal).into_owned(),
        };
        if lexeme.kind == TokenKind::Eof {
            self.exhausted = true;
        }
        if lexeme.unterminated {
            self.errors.push(LexingError::UnterminatedString { span });
        }
        Token::new(lexeme.kind, literal, span)
    }

    /// Takes the errors found since the last call.
    ///
    /// These never stop the lexer, the offending token is still produced.
    pub fn take_errors(&mut self) -> Vec<LexingError> {
        std::mem::take(&mut self.errors)
    }

    /// Gets whether the end of input token has been produced
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Iterates over every token before the end of input
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexingError {
    #[error("unterminated string literal, expected a closing `\"`")]
    UnterminatedString { span: Span },
}

impl Spanned for LexingError {
    fn span(&self) -> Span {
        match self {
            LexingError::UnterminatedString { span } => *span,
        }
    }
}
