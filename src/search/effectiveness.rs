//! Search effectiveness values and per-round draws

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::io::configuration::{MAX_SEARCH_EFFECTIVENESS, MIN_SEARCH_EFFECTIVENESS};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::region::RegionId;

/// Fraction of an area covered by one search effort, in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Effectiveness(f64);

impl Effectiveness {
    /// No coverage
    pub const NONE: Self = Self(0.0);
    /// Complete coverage
    pub const FULL: Self = Self(1.0);

    /// Validate a raw effectiveness value
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN or outside `[0, 1]`
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(invalid_parameter(
                "effectiveness",
                &value,
                &"search effectiveness must lie in [0, 1]",
            ))
        }
    }

    /// Raw fraction
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Number of cells one search with this effectiveness covers
    pub fn cell_quota(self, area: usize) -> usize {
        (area as f64 * self.0).floor() as usize
    }

    /// Fraction of an area a set of searched cells represents
    pub const fn from_coverage(searched: usize, area: usize) -> Self {
        if area == 0 {
            return Self::NONE;
        }
        Self((searched as f64 / area as f64).clamp(0.0, 1.0))
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Effectiveness applied to each of the three areas in one round
///
/// Areas not searched in the round carry zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EffectivenessVector([Effectiveness; 3]);

impl EffectivenessVector {
    /// Nothing searched
    pub const ZERO: Self = Self([Effectiveness::NONE; 3]);

    /// Validate three raw values
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside `[0, 1]`
    pub fn new(values: [f64; 3]) -> Result<Self> {
        let [a, b, c] = values;
        Ok(Self([
            Effectiveness::new(a)?,
            Effectiveness::new(b)?,
            Effectiveness::new(c)?,
        ]))
    }

    /// Effectiveness for one area
    pub fn get(&self, region: RegionId) -> Effectiveness {
        self.0.get(region.index()).copied().unwrap_or_default()
    }

    /// Replace the effectiveness for one area
    pub fn set(&mut self, region: RegionId, effectiveness: Effectiveness) {
        if let Some(slot) = self.0.get_mut(region.index()) {
            *slot = effectiveness;
        }
    }

    /// Raw values in area order
    pub fn values(&self) -> [f64; 3] {
        self.0.map(Effectiveness::value)
    }
}

/// Uniform range that per-round effectiveness is drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct EffectivenessRange {
    range: RangeInclusive<f64>,
}

impl Default for EffectivenessRange {
    fn default() -> Self {
        Self {
            range: MIN_SEARCH_EFFECTIVENESS..=MAX_SEARCH_EFFECTIVENESS,
        }
    }
}

impl EffectivenessRange {
    /// Create a draw range
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is outside `[0, 1]` or `low > high`
    pub fn new(low: f64, high: f64) -> Result<Self> {
        Effectiveness::new(low)?;
        Effectiveness::new(high)?;
        if low > high {
            return Err(invalid_parameter(
                "effectiveness_range",
                &format!("{low}..={high}"),
                &"lower bound exceeds upper bound",
            ));
        }
        Ok(Self { range: low..=high })
    }

    /// Lower bound
    pub const fn low(&self) -> f64 {
        *self.range.start()
    }

    /// Upper bound
    pub const fn high(&self) -> f64 {
        *self.range.end()
    }

    /// Draw one effectiveness value
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Effectiveness {
        Effectiveness(rng.random_range(self.range.clone()))
    }

    /// Draw a value for every listed area, leaving the rest at zero
    pub fn draw_for<R: Rng + ?Sized>(&self, regions: &[RegionId], rng: &mut R) -> EffectivenessVector {
        let mut vector = EffectivenessVector::ZERO;
        for &region in regions {
            vector.set(region, self.draw(rng));
        }
        vector
    }
}
