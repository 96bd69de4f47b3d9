//! Input/output: errors, configuration, CLI, progress and logging

/// Command-line arguments and experiment runner
pub mod cli;
/// Simulation constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Log subscriber setup
pub mod logging;
/// Progress bars for experiment runs
pub mod progress;
