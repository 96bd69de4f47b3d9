//! Probability math for the search model

/// Bayesian revision of area probabilities
pub mod bayes;
/// Sampling helpers and detection probabilities
pub mod probability;

pub use bayes::{Priors, Revision, revise};
