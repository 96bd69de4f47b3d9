//! Log subscriber setup for the command-line tool

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use crate::io::error::{AlgorithmError, Result};
use tracing_subscriber::EnvFilter;

/// Pick the log filter directive
///
/// `--verbose` wins over `RUST_LOG`, which wins over the default.
pub fn log_filter(verbose: bool, env_directive: Option<&str>) -> String {
    if verbose {
        return VERBOSE_LOG_FILTER.to_string();
    }
    env_directive
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

/// Install a stderr subscriber for the process
///
/// # Errors
///
/// Returns an error if the filter does not parse or a global subscriber is
/// already installed
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = log_filter(verbose, env_directive.as_deref());

    let filter = EnvFilter::try_new(&directive).map_err(|e| AlgorithmError::Output {
        operation: "log filter",
        reason: format!("'{directive}': {e}"),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AlgorithmError::Output {
            operation: "log subscriber",
            reason: e.to_string(),
        })
}
