use crate::args::{Args, Command};
use crate::commands::Diagnostic;
use clap::Parser;
use eyre::{eyre, WrapErr};
use std::io::{stdin, stdout};
use std::path::Path;
use tracing::{debug, trace, warn};

mod args;
mod commands;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    args.logging().init_logging()?;
    trace!("starting slb with args: {args:?}");
    debug!("slb version: {}", env!("CARGO_PKG_VERSION"));

    match &args.command {
        Command::Tokens { file: None } => commands::repl(stdin().lock(), stdout().lock())?,
        Command::Tokens { file: Some(file) } => {
            let src = read_source(file)?;
            for error in commands::write_tokens(&src, stdout().lock())? {
                warn!("{error}");
            }
        }
        Command::Parse { file } => parse(file)?,
    }
    Ok(())
}

fn read_source(path: &Path) -> eyre::Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("could not read {}", path.display()))
}

fn parse(path: &Path) -> eyre::Result<()> {
    let src = read_source(path)?;
    let (program, errors) = slb_ast_parsing::parse(&src);
    debug!("{path:?} has {} statements", program.len());
    println!("{program}");
    for error in &errors {
        Diagnostic::new(path, &src, error).emit();
    }
    match errors.len() {
        0 => Ok(()),
        1 => Err(eyre!("could not parse {}, found 1 problem", path.display())),
        n => Err(eyre!("could not parse {}, found {n} problems", path.display())),
    }
}
