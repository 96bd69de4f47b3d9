//! Bayesian search and rescue simulation
//!
//! A sailor is lost somewhere in three equally sized search areas. Each round
//! searches one or two areas with a randomly drawn effectiveness, and when the
//! sailor is not found the per-area probabilities are revised with Bayes' rule.
//! Automated strategies can be compared over many seeded sessions.

#![forbid(unsafe_code)]

/// Errors, constants, command-line interface, progress and logging
pub mod io;
/// Bayesian revision and probability helpers
pub mod math;
/// Target placement and search simulation
pub mod search;
/// Session state machine, strategies and experiments
pub mod session;
/// Search areas, coordinates and search history
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
