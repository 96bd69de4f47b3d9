//! Automated search strategies for simulation mode

use std::fmt;

use crate::math::bayes::Priors;
use crate::session::action::Action;
use crate::session::session::SessionSnapshot;
use crate::spatial::region::RegionId;

/// Pairs considered by the joint strategy, in tie-breaking order
const PAIRS: [(RegionId, RegionId); 3] = [
    (RegionId::One, RegionId::Two),
    (RegionId::One, RegionId::Three),
    (RegionId::Two, RegionId::Three),
];

/// Supplies the next action for a session
///
/// Implemented by the automated strategies; an interactive front end can
/// implement it to feed operator choices into the same driving loop.
pub trait ActionSelector {
    /// Decide the next action from the session's current state
    fn select(&mut self, snapshot: &SessionSnapshot) -> Action;
}

/// Rule for picking which areas to search each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyPolicy {
    /// Search the single most probable area twice
    HighestProbability,
    /// Search the two areas with the largest combined probability once each
    JointProbability,
}

impl StrategyPolicy {
    /// Both strategies, in reporting order
    pub const ALL: [Self; 2] = [Self::HighestProbability, Self::JointProbability];

    /// Pick an action from current beliefs alone
    ///
    /// Ties go to the lowest area number, or to the earliest of the pairs
    /// (1,2), (1,3), (2,3).
    pub fn choose(self, priors: &Priors) -> Action {
        self.choose_available(priors, [false; 3])
    }

    /// Pick an action, treating exhausted areas as holding no probability
    ///
    /// Falls back to [`StrategyPolicy::choose`] ranking when every area
    /// is exhausted.
    pub fn choose_available(self, priors: &Priors, exhausted: [bool; 3]) -> Action {
        let weight = |region: RegionId| {
            if exhausted.get(region.index()).copied().unwrap_or(false) {
                0.0
            } else {
                priors.get(region)
            }
        };
        let open = |region: RegionId| !exhausted.get(region.index()).copied().unwrap_or(false);
        let any_open = RegionId::ALL.iter().any(|&region| open(region));

        match self {
            Self::HighestProbability => {
                let mut best: Option<(RegionId, f64)> = None;
                for region in RegionId::ALL {
                    if any_open && !open(region) {
                        continue;
                    }
                    let p = if any_open { weight(region) } else { priors.get(region) };
                    if best.is_none_or(|(_, best_p)| p > best_p) {
                        best = Some((region, p));
                    }
                }
                Action::SearchTwice(best.map_or(RegionId::One, |(region, _)| region))
            }
            Self::JointProbability => {
                let mut best: Option<((RegionId, RegionId), f64)> = None;
                for (a, b) in PAIRS {
                    if any_open && !open(a) && !open(b) {
                        continue;
                    }
                    let sum = if any_open {
                        weight(a) + weight(b)
                    } else {
                        priors.get(a) + priors.get(b)
                    };
                    if best.is_none_or(|(_, best_sum)| sum > best_sum) {
                        best = Some(((a, b), sum));
                    }
                }
                let (a, b) = best.map_or((RegionId::One, RegionId::Two), |(pair, _)| pair);
                Action::SearchPair(a, b)
            }
        }
    }

    /// Short name used in reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighestProbability => "highest-probability",
            Self::JointProbability => "joint-probability",
        }
    }
}

impl fmt::Display for StrategyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ActionSelector for StrategyPolicy {
    fn select(&mut self, snapshot: &SessionSnapshot) -> Action {
        self.choose_available(&snapshot.priors, snapshot.exhausted)
    }
}
