//! Per-policy progress tracking for experiment runs

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_HZ};
use crate::session::policy::StrategyPolicy;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static SESSION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>20}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per policy under a shared display
///
/// Bars are safe to advance from the experiment's worker threads.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    policy_bars: Vec<(StrategyPolicy, ProgressBar)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::stderr_with_hz(
                PROGRESS_REFRESH_HZ,
            )),
            policy_bars: Vec::new(),
        }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            policy_bars: Vec::new(),
        }
    }

    /// Add a bar for a policy about to run `sessions` sessions
    pub fn start_policy(&mut self, policy: StrategyPolicy, sessions: usize) -> ProgressBar {
        let bar = self
            .multi_progress
            .add(ProgressBar::new(sessions as u64));
        bar.set_style(SESSION_STYLE.clone());
        bar.set_prefix(policy.name());
        self.policy_bars.push((policy, bar.clone()));
        bar
    }

    /// Mark a policy's run as finished with its mean round count
    pub fn complete_policy(&self, policy: StrategyPolicy, mean_rounds: f64) {
        if let Some((_, bar)) = self.policy_bars.iter().find(|(p, _)| *p == policy) {
            bar.finish_with_message(format!("✓ mean {mean_rounds:.3}"));
        }
    }

    /// Sessions completed so far for a policy
    pub fn position(&self, policy: StrategyPolicy) -> Option<u64> {
        self.policy_bars
            .iter()
            .find(|(p, _)| *p == policy)
            .map(|(_, bar)| bar.position())
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
