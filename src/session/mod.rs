//! Session orchestration, actions, strategies and Monte Carlo experiments

/// Commands a session accepts each round
pub mod action;
/// Parallel batches of automated sessions
pub mod experiment;
/// Automated action selection
pub mod policy;
/// The round-by-round search state machine
#[allow(clippy::module_inception)]
pub mod session;

pub use action::Action;
pub use experiment::{Experiment, ExperimentSummary, run_policy_experiment};
pub use policy::{ActionSelector, StrategyPolicy};
pub use session::{
    RoundResult, RoundStatus, RoundWarning, Session, SessionConfig, SessionOutcome, SessionSnapshot,
    SessionState, new_session,
};
