//! What each subcommand does, written against generic readers and writers

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;
use slb_ast_parsing::lexer::{Lexer, LexingError};
use slb_ast_parsing::parser::ParseError;
use slb_tokens::spanned::Spanned;
use std::fmt::{Display, Formatter};
use std::io;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Printed before every line the prompt reads
pub const PROMPT: &str = ">>";

/// Runs the interactive prompt until `input` is closed
pub fn repl(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            debug!("input closed, leaving prompt");
            return Ok(());
        };
        for error in write_tokens(&line, &mut output)? {
            warn!("{error}");
        }
    }
}

/// Writes every token of `src` up to the end of input, one per line.
///
/// Returns the problems the lexer ran into.
pub fn write_tokens(src: &str, mut output: impl Write) -> io::Result<Vec<LexingError>> {
    let mut lexer = Lexer::new(src);
    for token in &mut lexer {
        writeln!(output, "{token:?}")?;
    }
    Ok(lexer.take_errors())
}

/// A parse error located within the file it was found in
#[derive(Debug)]
pub struct Diagnostic<'a> {
    path: &'a Path,
    src: &'a str,
    error: &'a ParseError,
}

impl<'a> Diagnostic<'a> {
    pub fn new(path: &'a Path, src: &'a str, error: &'a ParseError) -> Self {
        Self { path, src, error }
    }

    /// Writes this diagnostic to stderr, colored if stderr supports it
    pub fn emit(&self) {
        eprintln!(
            "{}: {self}",
            "error".if_supports_color(Stderr, |text| text.bright_red().to_string())
        );
    }
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let span = self.error.span();
        let (line, col) = span.line_col(self.src);
        let source_line = span.source_line(self.src);
        let underline = span.len().clamp(1, source_line.len().saturating_sub(col).max(1));
        writeln!(f, "{}", self.error)?;
        writeln!(f, "  --> {}:{line}:{}", self.path.display(), col + 1)?;
        writeln!(f, "   | {source_line}")?;
        write!(f, "   | {:col$}{}", "", "^".repeat(underline))
    }
}
