//! A trait that can provide the [Span] of a token or diagnostic

use std::fmt::{Display, Formatter};

/// A trait that can provide the [Span] of a token or diagnostic
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A byte range within the buffer a lexer was created from
#[derive(Debug, Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(start: usize, len: usize) -> Self {
        Self { offset: start, len }
    }

    /// Gets a span directly after this span
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
        }
    }

    /// Creates a span that encompasses both
    pub fn join(&self, other: Self) -> Self {
        let min = self.offset.min(other.offset);
        let max = (self.offset + self.len).max(other.offset + other.len);
        Self {
            offset: min,
            len: max - min,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the 1-based line and 0-based column this span starts at within `src`.
    ///
    /// Columns count bytes, offsets past the end of `src` clamp to its end.
    pub fn line_col(&self, src: &str) -> (usize, usize) {
        let upto = &src.as_bytes()[..self.offset.min(src.len())];
        let line = 1 + upto.iter().filter(|&&b| b == b'\n').count();
        let col = match upto.iter().rposition(|&b| b == b'\n') {
            Some(nl) => upto.len() - nl - 1,
            None => upto.len(),
        };
        (line, col)
    }

    /// Gets the full source line this span starts on, without its line terminator
    pub fn source_line<'s>(&self, src: &'s str) -> &'s str {
        let bytes = src.as_bytes();
        let offset = self.offset.min(bytes.len());
        let start = bytes[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl + 1);
        let end = bytes[offset..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(bytes.len(), |nl| offset + nl);
        src.get(start..end).unwrap_or_default().trim_end_matches('\r')
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.offset, self.offset + self.len)
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

#[cfg(test)]
mod tests {
    use crate::spanned::{Span, Spanned};

    #[test]
    fn test_span_is_spanned() {
        let p = Span::new(3, 2).span();
        assert_eq!(p.offset, 3);
        assert_eq!(p.len, 2);
    }

    #[test]
    fn test_span_end() {
        let p = Span::new(0, 5).end();
        assert_eq!(p.offset, 5);
        assert_eq!(p.len, 0);
    }

    #[test]
    fn test_join() {
        let p1 = Span::new(0, 8);
        let p2 = Span::new(16, 8);
        assert_eq!(p1.join(p2), Span::new(0, 24));
        assert_eq!(p2.join(p1), Span::new(0, 24));
    }

    #[test]
    fn test_line_col() {
        let src = "let x = 5;\nlet y = 10;\n";
        assert_eq!(Span::new(0, 3).line_col(src), (1, 0));
        assert_eq!(Span::new(15, 1).line_col(src), (2, 4));
        assert_eq!(Span::new(src.len(), 0).line_col(src), (3, 0));
    }

    #[test]
    fn test_source_line() {
        let src = "let x = 5;\r\nlet y = 10;";
        assert_eq!(Span::new(4, 1).source_line(src), "let x = 5;");
        assert_eq!(Span::new(16, 1).source_line(src), "let y = 10;");
        assert_eq!(Span::new(100, 0).source_line(src), "let y = 10;");
    }
}
