//! A lexical token from a source buffer, along with the keyword table

use crate::spanned::{Span, Spanned};
use std::fmt::{Debug, Display, Formatter};

/// The reserved words of the language and the kinds they lex to.
///
/// Any other run of letters and underscores is an [TokenKind::Identifier].
pub const KEYWORDS: [(&str, TokenKind); 7] = [
    ("let", TokenKind::Let),
    ("fn", TokenKind::Fn),
    ("return", TokenKind::Return),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

/// A lexical token from a source buffer
#[derive(Clone)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    span: Span,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// The end-of-input sentinel, positioned at `span`
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the text this token was lexed from.
    ///
    /// For string literals this is the text between the quotes.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.literal)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.literal == other.literal
    }
}

impl Eq for Token {}

/// The kind for this token.
///
/// Displays as the symbol for operators and punctuation, the word for keywords, and an upper-case
/// class name for everything else.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum TokenKind {
    // literals
    Integer,
    Float,
    String,
    Identifier,

    /// EOF, repeated forever once the source is exhausted
    Eof,
    /// A byte the language has no use for
    Illegal,

    /// =
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Lt,
    Gt,
    /// ==
    Eq,
    Neq,

    Comma,
    SemiColon,
    Colon,
    LParen,
    RParen,
    LCurly,
    RCurly,
    LBracket,
    RBracket,

    Let,
    Fn,
    Return,
    If,
    Else,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TokenKind {
    /// The canonical text of this kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Integer => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENT",
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::Neq => "!=",
            TokenKind::Comma => ",",
            TokenKind::SemiColon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LCurly => "{",
            TokenKind::RCurly => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Let => "let",
            TokenKind::Fn => "fn",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::True => "true",
            TokenKind::False => "false",
        }
    }

    /// Looks up a run of letters and underscores in the keyword table
    pub fn lookup_word(word: &str) -> Self {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == word)
            .map_or(TokenKind::Identifier, |&(_, kind)| kind)
    }

    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }
}
