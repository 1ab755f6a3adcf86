//! Installs the process wide tracing subscriber

use crate::LoggingArgs;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::{format, writer::MakeWriterExt, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

/// Writes warnings and errors to stderr, everything else to stdout
pub fn stdio_writer() -> impl for<'a> MakeWriter<'a> + Send + Sync + 'static {
    std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout)
}

impl LoggingArgs {
    /// Installs a formatting subscriber filtered by these arguments, along with an [ErrorLayer]
    /// so error reports can capture the active spans.
    ///
    /// Fails if a global subscriber was already installed.
    pub fn init_logging(&self) -> Result<(), SetGlobalDefaultError> {
        let registry = Registry::default()
            .with(
                tracing_subscriber::fmt::layer()
                    .event_format(format().with_target(true))
                    .with_writer(stdio_writer())
                    .with_filter(self.log_level_filter()),
            )
            .with(ErrorLayer::default());
        tracing::subscriber::set_global_default(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_installs_once() {
        let logging = LoggingArgs::default();
        assert!(logging.init_logging().is_ok());
        assert!(logging.init_logging().is_err());
        tracing::warn!("logged after install");
    }
}
