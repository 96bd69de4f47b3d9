use std::fmt;

use rand::Rng;

use crate::io::configuration::{PLACEMENT_HIGH, PLACEMENT_LOW, PLACEMENT_MODE};
use crate::io::error::{Result, invalid_configuration};
use crate::math::probability::triangular;
use crate::spatial::region::{Cell, Region, RegionId};

/// Hidden location of the missing sailor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    region: RegionId,
    cell: Cell,
}

impl Target {
    /// Place a target at a known location
    ///
    /// # Errors
    ///
    /// Returns an error if the cell lies outside the named area
    pub fn new(regions: &[Region; 3], region: RegionId, cell: Cell) -> Result<Self> {
        let fits = regions
            .get(region.index())
            .is_some_and(|area| area.contains(cell));
        if !fits {
            return Err(invalid_configuration(&format!(
                "target cell {cell} lies outside search area {region}"
            )));
        }
        Ok(Self { region, cell })
    }

    /// Area containing the target
    pub const fn region(&self) -> RegionId {
        self.region
    }

    /// Local cell of the target
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    /// Whether the target sits at this cell of this area
    pub fn is_at(&self, region: RegionId, cell: Cell) -> bool {
        self.region == region && self.cell == cell
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "area {} at {}", self.region, self.cell)
    }
}

/// Draws the hidden target location for a new session
///
/// The area comes from a truncated triangular draw, which favours the
/// middle area; the cell is uniform within the chosen area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPlacer {
    low: f64,
    high: f64,
    mode: f64,
}

impl Default for TargetPlacer {
    fn default() -> Self {
        Self {
            low: PLACEMENT_LOW,
            high: PLACEMENT_HIGH,
            mode: PLACEMENT_MODE,
        }
    }
}

impl TargetPlacer {
    /// Choose an area with the triangular weighting
    pub fn draw_region<R: Rng + ?Sized>(&self, rng: &mut R) -> RegionId {
        let sample = triangular(rng, self.low, self.high, self.mode);
        // The upper bound is only reachable through rounding
        let index = (sample.floor() - self.low).max(0.0) as usize;
        RegionId::from_index(index).unwrap_or(RegionId::Three)
    }

    /// Place the target somewhere in one of the areas
    pub fn place<R: Rng + ?Sized>(&self, regions: &[Region; 3], rng: &mut R) -> Target {
        let region_id = self.draw_region(rng);
        let cell = regions.get(region_id.index()).map_or(Cell::new(0, 0), |region| {
            Cell::new(
                rng.random_range(0..region.width()),
                rng.random_range(0..region.height()),
            )
        });

        Target {
            region: region_id,
            cell,
        }
    }
}
