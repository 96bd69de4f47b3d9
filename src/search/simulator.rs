use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::search::effectiveness::Effectiveness;
use crate::search::placement::Target;
use crate::spatial::history::SearchHistory;
use crate::spatial::region::{Cell, Region};

/// Result of a single search event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The target's cell was among the searched cells
    Found,
    /// Cells were searched without finding the target
    NotFound,
    /// Every cell of the area had already been searched; nothing was done
    Exhausted,
}

/// Outcome of a search event together with the cells it covered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// What the search revealed
    pub outcome: SearchOutcome,
    /// Cells covered by this event, for the caller to record in history
    pub searched: Vec<Cell>,
}

impl SearchReport {
    /// The search revealed the target
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }
}

/// Simulate one search of an area
///
/// Only cells that no earlier event covered are eligible. They are shuffled
/// uniformly and the first `floor(area * effectiveness)` are searched, or all
/// of them when fewer remain. The target is found exactly when its cell is in
/// that prefix, so detection is driven by coverage of the true cell rather
/// than by the effectiveness value directly.
///
/// History is read, never written: record `searched` afterwards.
pub fn search<R: Rng + ?Sized>(
    region: &Region,
    effectiveness: Effectiveness,
    history: &SearchHistory,
    target: &Target,
    rng: &mut R,
) -> SearchReport {
    let mut candidates = region.unsearched(history);
    if candidates.is_empty() {
        return SearchReport {
            outcome: SearchOutcome::Exhausted,
            searched: Vec::new(),
        };
    }

    candidates.shuffle(rng);
    candidates.truncate(effectiveness.cell_quota(region.area()));

    let found = candidates
        .iter()
        .any(|&cell| target.is_at(region.id(), cell));

    trace!(
        region = %region.id(),
        %effectiveness,
        searched = candidates.len(),
        found,
        "search event"
    );

    SearchReport {
        outcome: if found {
            SearchOutcome::Found
        } else {
            SearchOutcome::NotFound
        },
        searched: candidates,
    }
}
