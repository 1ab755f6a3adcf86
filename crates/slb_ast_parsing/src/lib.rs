#![doc = include_str!("../README.md")]

use crate::lexer::Lexer;
use crate::parser::{ParseError, Parser};
use slb_ast::program::Program;
use std::io;
use std::path::Path;
use tracing::debug;

pub mod lexer;
pub mod parser;

/// Parses a source buffer into a program, along with every problem found on the way.
pub fn parse(src: &str) -> (Program, Vec<ParseError>) {
    Parser::new(Lexer::new(src)).parse_program()
}

/// Reads a file into memory and parses it.
///
/// Only reading the file can fail, problems with its contents are returned alongside the
/// program.
pub fn parse_file(path: &Path) -> io::Result<(Program, Vec<ParseError>)> {
    debug!("parsing {path:?}");
    let src = std::fs::read_to_string(path)?;
    Ok(parse(&src))
}
