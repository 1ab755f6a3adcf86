//! the args for running slb

use slb_cli_common::LoggingArgs;
use std::path::PathBuf;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Lexes and parses slb source code")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Eq, clap::Subcommand)]
pub enum Command {
    /// Prints every token of a source file.
    ///
    /// Without a file an interactive prompt is started instead, printing the tokens of each line
    /// read until input is closed.
    Tokens {
        #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
    /// Parses a source file, printing the program and any problems found
    Parse {
        #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_tokens_without_file() {
        let args = Args::try_parse_from("slb tokens".split(" ")).expect("could not parse test string");
        assert_eq!(args.command, Command::Tokens { file: None });
    }

    #[test]
    fn test_tokens_with_file() {
        let args =
            Args::try_parse_from("slb tokens main.slb".split(" ")).expect("could not parse test string");
        let Command::Tokens { file: Some(file) } = args.command else {
            panic!("expected a tokens command with a file: {:?}", args.command)
        };
        assert_eq!(file, Path::new("main.slb"));
    }

    #[test]
    fn test_parse_requires_file() {
        assert!(Args::try_parse_from("slb parse".split(" ")).is_err());
        let args =
            Args::try_parse_from("slb parse main.slb".split(" ")).expect("could not parse test string");
        assert_eq!(
            args.command,
            Command::Parse {
                file: PathBuf::from("main.slb")
            }
        );
    }

    #[test]
    fn test_logging_flags_anywhere() {
        let args =
            Args::try_parse_from("slb -vv parse main.slb".split(" ")).expect("could not parse test string");
        assert_eq!(args.logging().verbosity(), 2);
        let args =
            Args::try_parse_from("slb tokens -q".split(" ")).expect("could not parse test string");
        assert_eq!(args.logging().verbosity(), -1);
    }

    #[test]
    fn test_command_required() {
        assert!(Args::try_parse_from(["slb"]).is_err());
    }
}
