//! Console logging bootstrap.
//!
//! The common crate logs through the `log` facade; this installs the
//! `flexi_logger` backend once at startup. The level comes from `RUST_LOG`
//! when set, otherwise from the build mode.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::info;

/// Logger setup failure. The card keeps running without console logs.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to start logger: {0}")]
    Backend(#[from] FlexiLoggerError),
}

/// Default level when `RUST_LOG` is unset.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub const fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

/// Start logging to stderr.
///
/// Keep the returned handle alive for the whole run; dropping it flushes and
/// stops the logger.
///
/// # Errors
/// Returns an error when `RUST_LOG` cannot be parsed or the backend fails to
/// start.
pub fn init_logging() -> Result<LoggerHandle, LoggingError> {
    let handle = Logger::try_with_env_or_str(default_log_level())?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=app_start platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}
