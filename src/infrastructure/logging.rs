//! Logger bootstrap
//!
//! Diagnostics go to stderr so command output on stdout stays clean.
//! `RUST_LOG` takes precedence over the level chosen by `-v` flags.

use crate::error::{Result, WtrackError};
use flexi_logger::{Logger, LoggerHandle};

/// Map the number of `-v` flags to a log level spec
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start the stderr logger. The returned handle must be kept alive for the
/// lifetime of the process.
pub fn init(verbose: u8) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(level_for_verbosity(verbose))
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|e| WtrackError::Config(format!("Failed to start logger: {}", e)))
}
