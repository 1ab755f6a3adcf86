use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_till, take_while1};
use nom::character::complete::{char, digit0, digit1, multispace1};
use nom::combinator::{consumed, eof, map, opt, recognize, value};
use nom::error::{context, VerboseError};
use nom::multi::many0_count;
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;
use slb_tokens::token::TokenKind;

type Result<'a, O> = IResult<&'a [u8], O, VerboseError<&'a [u8]>>;

/// A token as recognized from the front of the unconsumed input
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Lexeme<'a> {
    pub kind: TokenKind,
    pub literal: &'a [u8],
    /// only ever set for strings missing their closing quote
    pub unterminated: bool,
}

impl<'a> Lexeme<'a> {
    fn new(kind: TokenKind, literal: &'a [u8]) -> Self {
        Self {
            kind,
            literal,
            unterminated: false,
        }
    }
}

/// Recognizes the next token of `src`.
///
/// Returns the number of insignificant bytes skipped before the token, the number of bytes the
/// token itself spans, and the token.
pub(super) fn parse_token(src: &[u8]) -> Result<'_, (usize, usize, Lexeme<'_>)> {
    context(
        "token",
        map(
            pair(parse_insignificant, consumed(_parse_token)),
            |(skipped, (consumed, lexeme))| (skipped.len(), consumed.len(), lexeme),
        ),
    )(src)
}

fn _parse_token(src: &[u8]) -> Result<'_, Lexeme<'_>> {
    alt((
        parse_eof,
        parse_word,
        parse_number,
        parse_string,
        parse_operator,
        parse_punctuation,
        parse_illegal,
    ))(src)
}

fn parse_eof(src: &[u8]) -> Result<'_, Lexeme<'_>> {
    context(
        "eof",
        map(eof, |rest: &[u8]| Lexeme::new(TokenKind::Eof, rest)),
    )(src)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn parse_word(src: &[u8]) -> Result<'_, Lexeme<'_>> {
    context(
        "word",
        map(take_while1(is_word_byte), |word: &[u8]| {
            let kind = std::str::from_utf8(word)
                .map_or(TokenKind::Identifier, TokenKind::lookup_word);
            Lexeme::new(kind, word)
        }),
    )(src)
}

/// Integers are a run of digits, floats are two runs joined by a `.`.
///
/// The fractional run may be empty, `5.` is the float `5`.
fn parse_number(src: &[u8]) -> Result<'_, Lexeme<'_>> {
    context(
        "number",
        alt((
            map(
                recognize(tuple((digit1, char('.'), digit0))),
                |literal: &[u8]| Lexeme::new(TokenKind::Float, literal),
            ),
            map(digit1, |literal: &[u8]| {
                Lexeme::new(TokenKind::Integer, literal)
            }),
        )),
    )(src)
}

/// Strings are taken verbatim, there are no escape sequences
fn parse_string(src: &[u8]) -> Result<'_, Lexeme<'_>> {
    context(
        "string",
        map(
            preceded(
                char('"'),
                pair(take_till(|b: u8| b == b'"'), opt(char('"'))),
            ),
            |(content, closing): (&[u8], Option<char>)| Lexeme {
                kind: TokenKind::String,
                literal: content,
                unterminated: closing.is_none(),
            },
        ),
    )(src)
}

fn parse_operator(src: &[u8]) -> Result<'_, Lexeme<'_>> {
    context(
        "operator",
        map(
            consumed(alt((
                value(TokenKind::Eq, tag("==")),
                value(TokenKind::Neq, tag("!=")),
                value(TokenKind::Assign, char('=')),
                value(TokenKind::Bang, char('!')),
                value(TokenKind::Plus, char('+')),
                value(TokenKind::Minus, char('-')),
                value(TokenKind::Star, char('*')),
                value(TokenKind::Slash, char('/')),
                value(TokenKind::Lt, char('<')),
                value(TokenKind::Gt, char('>')),
            ))),
            |(literal, kind)| Lexeme::new(kind, literal),
        ),
    )(src)
}

fn parse_punctuation(src: &[u8]) -> Result<'_, Lexeme<'_>> {
    context(
        "punctuation",
        map(
            consumed(alt((
                value(TokenKind::Comma, char(',')),
                value(TokenKind::SemiColon, char(';')),
                value(TokenKind::Colon, char(':')),
                value(TokenKind::LParen, char('(')),
                value(TokenKind::RParen, char(')')),
                value(TokenKind::LCurly, char('{')),
                value(TokenKind::RCurly, char('}')),
                value(TokenKind::LBracket, char('[')),
                value(TokenKind::RBracket, char(']')),
            ))),
            |(literal, kind)| Lexeme::new(kind, literal),
        ),
    )(src)
}

/// Anything else is a single illegal byte, so the lexer always makes progress
fn parse_illegal(src: &[u8]) -> Result<'_, Lexeme<'_>> {
    context(
        "illegal",
        map(take(1_usize), |byte: &[u8]| {
            Lexeme::new(TokenKind::Illegal, byte)
        }),
    )(src)
}

/// Whitespace and `//` line comments, in any order, until neither applies
fn parse_insignificant(src: &[u8]) -> Result<'_, &[u8]> {
    context(
        "insignificant",
        recognize(many0_count(alt((
            context("whitespace", multispace1),
            context(
                "line comment",
                recognize(preceded(
                    tag("//"),
                    take_till(|b: u8| b == b'\n' || b == b'\r'),
                )),
            ),
        )))),
    )(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::combinator::all_consuming;
    use test_log::test;

    fn token(src: &str) -> (usize, usize, Lexeme<'_>) {
        let (_, token) = parse_token(src.as_bytes()).unwrap_or_else(|e| panic!("{e:?}"));
        token
    }

    #[test]
    fn test_insignificant() {
        let (rest, _) = all_consuming(parse_insignificant)(b"  // whats her name?\n\t\r\n".as_slice())
            .unwrap_or_else(|e| panic!("{e:?}"));
        assert!(rest.is_empty(), "should be empty but got {rest:?}");
        let (rest, _) = all_consuming(parse_insignificant)(b"// one\n// two\n  // three".as_slice())
            .unwrap_or_else(|e| panic!("{e:?}"));
        assert!(rest.is_empty(), "should be empty but got {rest:?}");
    }

    #[test]
    fn test_insignificant_stops_at_token() {
        let (rest, skipped) =
            parse_insignificant(b" // comment\n  let".as_slice()).unwrap_or_else(|e| panic!("{e:?}"));
        assert_eq!(rest, b"let");
        assert_eq!(skipped.len(), 14);
    }

    #[test]
    fn test_parse_word() {
        let (_, _, lexeme) = token("return_value");
        assert_eq!(lexeme, Lexeme::new(TokenKind::Identifier, b"return_value"));
        let (_, _, lexeme) = token("return value");
        assert_eq!(lexeme, Lexeme::new(TokenKind::Return, b"return"));
    }

    #[test]
    fn test_digits_stop_words() {
        let (_, len, lexeme) = token("abc123");
        assert_eq!(len, 3);
        assert_eq!(lexeme.kind, TokenKind::Identifier);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(token("838383;").2, Lexeme::new(TokenKind::Integer, b"838383"));
        assert_eq!(token("3.14").2, Lexeme::new(TokenKind::Float, b"3.14"));
        assert_eq!(token("5.;").2, Lexeme::new(TokenKind::Float, b"5."));
    }

    #[test]
    fn test_parse_string() {
        let (skipped, len, lexeme) = token(" \"hello world\" x");
        assert_eq!(skipped, 1);
        assert_eq!(len, 13);
        assert_eq!(lexeme, Lexeme::new(TokenKind::String, b"hello world"));
    }

    #[test]
    fn test_parse_unterminated_string() {
        let (_, len, lexeme) = token("\"hello");
        assert_eq!(len, 6);
        assert_eq!(lexeme.literal, b"hello");
        assert!(lexeme.unterminated);
    }

    #[test]
    fn test_two_byte_operators_first() {
        assert_eq!(token("==").2.kind, TokenKind::Eq);
        assert_eq!(token("=!").2.kind, TokenKind::Assign);
        assert_eq!(token("!=").2.kind, TokenKind::Neq);
        assert_eq!(token("!x").2.kind, TokenKind::Bang);
    }

    #[test]
    fn test_single_slash_is_an_operator() {
        let (_, len, lexeme) = token("/ 2");
        assert_eq!(len, 1);
        assert_eq!(lexeme.kind, TokenKind::Slash);
    }

    #[test]
    fn test_illegal_byte() {
        let (_, len, lexeme) = token("@@");
        assert_eq!(len, 1);
        assert_eq!(lexeme, Lexeme::new(TokenKind::Illegal, b"@"));
    }

    #[test]
    fn test_eof() {
        let (skipped, len, lexeme) = token("  // nothing here");
        assert_eq!(skipped, 17);
        assert_eq!(len, 0);
        assert_eq!(lexeme.kind, TokenKind::Eof);
    }
}
