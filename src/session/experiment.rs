//! Monte Carlo comparison of search strategies
//!
//! Runs many independent sessions under a policy and reports how many rounds
//! each took to find the target. Sessions run in parallel, each owning its
//! own state and random source; per-session seeds are drawn up front from the
//! experiment seed so results do not depend on thread scheduling.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use tracing::info;

use crate::io::configuration::{DEFAULT_MAX_ROUNDS, DEFAULT_SESSIONS};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::session::policy::StrategyPolicy;
use crate::session::session::{Session, SessionConfig, SessionOutcome};

/// Aggregate result of running one policy over many sessions
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentSummary {
    /// Policy that chose every action
    pub policy: StrategyPolicy,
    /// Mean rounds until the target was found, over resolved sessions
    pub mean_rounds: f64,
    /// Number of sessions that found the target
    pub sample_size: usize,
    /// Sessions that hit the round cap first
    pub unresolved: usize,
    /// Fewest rounds any session needed
    pub min_rounds: usize,
    /// Most rounds any resolved session needed
    pub max_rounds: usize,
}

impl fmt::Display for ExperimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average searches for {} simulations ({}): {:.3} (min {}, max {})",
            self.sample_size, self.policy, self.mean_rounds, self.min_rounds, self.max_rounds
        )?;
        if self.unresolved > 0 {
            write!(f, ", {} unresolved", self.unresolved)?;
        }
        Ok(())
    }
}

/// Repeatable batch of automated sessions
#[derive(Debug, Clone)]
pub struct Experiment {
    config: SessionConfig,
    seed: u64,
    sessions: usize,
    max_rounds: usize,
}

impl Experiment {
    /// Experiment over the given layout with default session count and round cap
    pub const fn new(config: SessionConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            sessions: DEFAULT_SESSIONS,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Set how many sessions each policy runs
    #[must_use]
    pub const fn sessions(mut self, sessions: usize) -> Self {
        self.sessions = sessions;
        self
    }

    /// Set the round cap per session
    #[must_use]
    pub const fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Number of sessions each policy runs
    pub const fn session_count(&self) -> usize {
        self.sessions
    }

    /// Seed of every session, identical for every policy
    pub fn session_seeds(&self) -> Vec<u64> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.sessions).map(|_| rng.random::<u64>()).collect()
    }

    /// Run every session under a policy
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, no sessions are
    /// requested, or no session finds the target within the round cap
    pub fn run(&self, policy: StrategyPolicy) -> Result<ExperimentSummary> {
        self.run_with_observer(policy, |_| {})
    }

    /// Run every session under a policy, reporting each outcome as it lands
    ///
    /// The observer is called from worker threads in completion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, no sessions are
    /// requested, or no session finds the target within the round cap
    pub fn run_with_observer<F>(&self, policy: StrategyPolicy, observer: F) -> Result<ExperimentSummary>
    where
        F: Fn(&SessionOutcome) + Sync,
    {
        self.validate()?;

        let outcomes = self
            .session_seeds()
            .into_par_iter()
            .map(|seed| {
                let mut session = Session::new(&self.config, Some(seed))?;
                let mut selector = policy;
                let outcome = session.run(&mut selector, self.max_rounds)?;
                observer(&outcome);
                Ok(outcome)
            })
            .collect::<Result<Vec<_>>>()?;

        let summary = summarize(policy, &outcomes)?;
        info!(
            %policy,
            mean_rounds = summary.mean_rounds,
            sample_size = summary.sample_size,
            unresolved = summary.unresolved,
            "experiment complete"
        );
        Ok(summary)
    }

    /// Run both policies over the same session seeds
    ///
    /// # Errors
    ///
    /// Returns the first error from either policy's run
    pub fn compare(&self) -> Result<Vec<ExperimentSummary>> {
        StrategyPolicy::ALL
            .iter()
            .map(|&policy| self.run(policy))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.sessions == 0 {
            return Err(invalid_parameter(
                "num_sessions",
                &self.sessions,
                &"an experiment needs at least one session",
            ));
        }
        if self.max_rounds == 0 {
            return Err(invalid_parameter(
                "max_rounds",
                &self.max_rounds,
                &"sessions need at least one round to find anything",
            ));
        }
        self.config.regions()?;
        self.config.priors()?;
        Ok(())
    }
}

/// Run one policy over `num_sessions` seeded sessions
///
/// # Errors
///
/// See [`Experiment::run`]
pub fn run_policy_experiment(
    policy: StrategyPolicy,
    num_sessions: usize,
    config: &SessionConfig,
    seed: u64,
) -> Result<ExperimentSummary> {
    Experiment::new(config.clone(), seed)
        .sessions(num_sessions)
        .run(policy)
}

fn summarize(policy: StrategyPolicy, outcomes: &[SessionOutcome]) -> Result<ExperimentSummary> {
    let rounds: Vec<usize> = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            SessionOutcome::Found { rounds } => Some(*rounds),
            SessionOutcome::Quit { .. } | SessionOutcome::Unresolved { .. } => None,
        })
        .collect();
    let unresolved = outcomes.len() - rounds.len();

    let (Some(&min_rounds), Some(&max_rounds)) = (rounds.iter().min(), rounds.iter().max()) else {
        return Err(computation_error(
            "run_policy_experiment",
            &format!("none of {} sessions found the target", outcomes.len()),
        ));
    };

    let mean_rounds = rounds.iter().sum::<usize>() as f64 / rounds.len() as f64;

    Ok(ExperimentSummary {
        policy,
        mean_rounds,
        sample_size: rounds.len(),
        unresolved,
        min_rounds,
        max_rounds,
    })
}
