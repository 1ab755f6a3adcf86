#![doc = include_str!("../README.md")]

use clap::{value_parser, ArgAction, Args};

#[cfg(feature = "tracing")]
pub mod logging;

/// Common way to set logging levels
#[derive(Debug, Default, Clone, Copy, Args)]
pub struct LoggingArgs {
    /// Log more, `-vv` logs everything
    #[clap(short = 'v', global = true, value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Log less, `-qq` disables logging
    #[clap(short = 'q', global = true, value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// How far logging was moved away from the default level, positive being more verbose
    pub fn verbosity(&self) -> i8 {
        self.verbose.min(2) as i8 - self.quiet.min(2) as i8
    }

    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used
    #[cfg(feature = "tracing")]
    pub fn log_level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self.verbosity() {
            ..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            2.. => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    fn verbosity(args: &str) -> i8 {
        TestArgs::try_parse_from(args.split_whitespace())
            .expect("could not parse test string")
            .logging
            .verbosity()
    }

    #[test]
    fn test_default_verbosity() {
        assert_eq!(verbosity("slb"), 0);
        assert_eq!(LoggingArgs::default().verbosity(), 0);
    }

    #[test]
    fn test_counted_flags() {
        assert_eq!(verbosity("slb -v"), 1);
        assert_eq!(verbosity("slb -vv"), 2);
        assert_eq!(verbosity("slb -q"), -1);
        assert_eq!(verbosity("slb -qq"), -2);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(TestArgs::try_parse_from(["slb", "-v", "-q"]).is_err());
    }

    #[test]
    #[cfg(feature = "tracing")]
    fn test_level_filter() {
        use tracing::level_filters::LevelFilter;
        let args = TestArgs::try_parse_from(["slb", "-vv"]).unwrap();
        assert_eq!(args.logging.log_level_filter(), LevelFilter::TRACE);
        assert_eq!(LoggingArgs::default().log_level_filter(), LevelFilter::INFO);
    }
}
