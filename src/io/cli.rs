//! Command-line interface for running search strategy experiments

use crate::io::configuration::{
    DEFAULT_MAX_ROUNDS, DEFAULT_PRIORS, DEFAULT_REGION_WIDTH, DEFAULT_SEED, DEFAULT_SESSIONS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::session::experiment::{Experiment, ExperimentSummary};
use crate::session::policy::StrategyPolicy;
use crate::session::session::SessionConfig;
use clap::{Parser, ValueEnum};

/// Which strategies to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyChoice {
    /// Search the most probable area twice each round
    HighestProbability,
    /// Search the most probable pair of areas each round
    JointProbability,
    /// Run both over the same sessions and compare
    Both,
}

impl PolicyChoice {
    /// Policies to run, in reporting order
    pub fn policies(self) -> Vec<StrategyPolicy> {
        match self {
            Self::HighestProbability => vec![StrategyPolicy::HighestProbability],
            Self::JointProbability => vec![StrategyPolicy::JointProbability],
            Self::Both => StrategyPolicy::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bayes-rescue")]
#[command(
    author,
    version,
    about = "Compare Bayesian search and rescue strategies by Monte Carlo simulation"
)]
/// Command-line arguments for the experiment runner
pub struct Cli {
    /// Random seed for reproducible experiments
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Sessions simulated per policy
    #[arg(short = 'n', long, default_value_t = DEFAULT_SESSIONS)]
    pub sessions: usize,

    /// Strategy to simulate
    #[arg(short, long, value_enum, default_value_t = PolicyChoice::Both)]
    pub policy: PolicyChoice,

    /// Side length of each square search area in cells
    #[arg(long, default_value_t = DEFAULT_REGION_WIDTH)]
    pub size: usize,

    /// Starting probabilities for areas 1, 2 and 3 (comma separated)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub priors: Option<Vec<f64>>,

    /// Rounds before a session is abandoned as unresolved
    #[arg(short, long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every round at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Session layout described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if `--priors` does not list exactly three values
    pub fn session_config(&self) -> Result<SessionConfig> {
        let initial_priors = match self.priors.as_deref() {
            None => DEFAULT_PRIORS,
            Some(&[p1, p2, p3]) => [p1, p2, p3],
            Some(values) => {
                return Err(invalid_parameter(
                    "priors",
                    &format!("{values:?}"),
                    &"expected exactly three comma separated probabilities",
                ));
            }
        };

        Ok(SessionConfig {
            initial_priors,
            ..SessionConfig::square(self.size)
        })
    }
}

/// Runs the requested experiments with progress tracking
pub struct ExperimentRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl ExperimentRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run every requested policy
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an experiment fails
    pub fn process(&mut self) -> Result<Vec<ExperimentSummary>> {
        let experiment = Experiment::new(self.cli.session_config()?, self.cli.seed)
            .sessions(self.cli.sessions)
            .max_rounds(self.cli.max_rounds);

        let mut summaries = Vec::new();
        for policy in self.cli.policy.policies() {
            let bar = self
                .progress_manager
                .start_policy(policy, experiment.session_count());
            let summary = experiment.run_with_observer(policy, |_| bar.inc(1))?;
            self.progress_manager
                .complete_policy(policy, summary.mean_rounds);
            summaries.push(summary);
        }

        self.progress_manager.finish();
        Ok(summaries)
    }
}

/// Format experiment results for the terminal
pub fn render_report(summaries: &[ExperimentSummary]) -> String {
    let mut report = String::new();
    for summary in summaries {
        report.push_str(&format!("{summary}\n"));
    }

    if let [first, second] = summaries {
        let (better, worse) = if first.mean_rounds <= second.mean_rounds {
            (first, second)
        } else {
            (second, first)
        };
        report.push_str(&format!(
            "{} needs {:.3} fewer searches on average than {}\n",
            better.policy,
            worse.mean_rounds - better.mean_rounds,
            worse.policy
        ));
    }

    report
}
