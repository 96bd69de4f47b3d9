use bitvec::prelude::*;
use tracing::warn;

use crate::spatial::region::{Cell, Region};

/// Accumulated search events for one area
///
/// Keeps every event's cell list in order alongside a coverage bitmap
/// indexed by [`Region::linear_index`], so membership tests stay O(1)
/// however many events have been recorded.
#[derive(Clone, Debug)]
pub struct SearchHistory {
    region: Region,
    events: Vec<Vec<Cell>>,
    coverage: BitVec,
    searched: usize,
}

impl SearchHistory {
    /// Create an empty history for a region
    pub fn new(region: Region) -> Self {
        Self {
            region,
            events: Vec::new(),
            coverage: bitvec![0; region.area()],
            searched: 0,
        }
    }

    /// Region this history belongs to
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Append one search event
    ///
    /// Cells outside the region are dropped. Returns how many cells were
    /// covered for the first time.
    pub fn record(&mut self, cells: &[Cell]) -> usize {
        let mut event = Vec::with_capacity(cells.len());
        let mut newly_covered = 0;

        for &cell in cells {
            let Some(index) = self.region.linear_index(cell) else {
                warn!(
                    region = %self.region.id(),
                    %cell,
                    "ignoring searched cell outside its area"
                );
                continue;
            };
            if let Some(mut bit) = self.coverage.get_mut(index)
                && !*bit
            {
                bit.set(true);
                newly_covered += 1;
            }
            event.push(cell);
        }

        self.searched += newly_covered;
        self.events.push(event);
        newly_covered
    }

    /// Whether any recorded event covered the cell
    pub fn is_searched(&self, cell: Cell) -> bool {
        self.region
            .linear_index(cell)
            .and_then(|index| self.coverage.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> &[Vec<Cell>] {
        &self.events
    }

    /// Number of recorded events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of distinct cells ever searched
    pub const fn searched_count(&self) -> usize {
        self.searched
    }

    /// Fraction of the region searched so far
    pub const fn coverage(&self) -> f64 {
        self.searched as f64 / self.region.area() as f64
    }

    /// Every cell of the region has been searched at least once
    pub const fn is_exhausted(&self) -> bool {
        self.searched >= self.region.area()
    }

    /// Forget all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
        self.coverage.fill(false);
        self.searched = 0;
    }
}
