use std::fmt;

use tracing::warn;

use crate::io::configuration::{DEFAULT_PRIORS, DEGENERATE_EPSILON, PRIOR_SUM_TOLERANCE};
use crate::io::error::{Result, invalid_parameter};
use crate::search::effectiveness::EffectivenessVector;
use crate::spatial::region::RegionId;

/// Belief that the target lies in each of the three areas
///
/// Always non-negative and finite, summing to 1 within
/// [`PRIOR_SUM_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Priors([f64; 3]);

impl Default for Priors {
    fn default() -> Self {
        Self(DEFAULT_PRIORS)
    }
}

impl Priors {
    /// Validate a probability vector
    ///
    /// # Errors
    ///
    /// Returns an error if any value is negative or non-finite, or if the
    /// values do not sum to 1
    pub fn new(values: [f64; 3]) -> Result<Self> {
        if let Some(bad) = values.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(invalid_parameter(
                "initial_priors",
                &format!("{values:?}"),
                &format!("probability {bad} is not a finite non-negative number"),
            ));
        }

        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() >= PRIOR_SUM_TOLERANCE {
            return Err(invalid_parameter(
                "initial_priors",
                &format!("{values:?}"),
                &format!("probabilities sum to {sum}, expected 1"),
            ));
        }

        Ok(Self(values))
    }

    /// Probability for one area
    pub fn get(&self, region: RegionId) -> f64 {
        self.0.get(region.index()).copied().unwrap_or(0.0)
    }

    /// Raw values in area order
    pub const fn values(&self) -> [f64; 3] {
        self.0
    }

    /// Sum of all three probabilities
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl fmt::Display for Priors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p1, p2, p3] = self.0;
        write!(f, "P1 = {p1:.3}, P2 = {p2:.3}, P3 = {p3:.3}")
    }
}

/// Outcome of one Bayesian revision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Revision {
    /// Posterior probabilities
    pub priors: Priors,
    /// The evidence contradicted every hypothesis and the fallback was used
    pub degenerate: bool,
}

/// Revise area probabilities after a round that did not find the target
///
/// `p_i' = p_i (1 - sep_i) / sum_j p_j (1 - sep_j)`. Unsearched areas
/// (`sep = 0`) keep their relative weight and are only renormalized.
///
/// When the denominator is not a positive normal number every area was
/// certain to reveal the target yet nothing was found. The denominator is
/// then replaced by [`DEGENERATE_EPSILON`] and each numerator gains the same
/// epsilon weighted by its prior, which leaves the prior belief in place.
pub fn revise(priors: &Priors, effectiveness: &EffectivenessVector) -> Revision {
    let p = priors.values();
    let sep = effectiveness.values();

    let numerators = [
        p[0] * (1.0 - sep[0]),
        p[1] * (1.0 - sep[1]),
        p[2] * (1.0 - sep[2]),
    ];
    let denominator: f64 = numerators.iter().sum();

    if denominator.is_normal() && denominator > 0.0 {
        return Revision {
            priors: Priors(numerators.map(|n| n / denominator)),
            degenerate: false,
        };
    }

    warn!(
        ?p,
        ?sep,
        denominator,
        "Bayesian update denominator underflowed, keeping prior belief"
    );

    let smoothed_denominator = denominator.max(0.0) + DEGENERATE_EPSILON;
    let mut smoothed = [0.0; 3];
    for ((slot, numerator), prior) in smoothed.iter_mut().zip(numerators).zip(p) {
        *slot = DEGENERATE_EPSILON.mul_add(prior, numerator.max(0.0)) / smoothed_denominator;
    }

    Revision {
        priors: Priors(smoothed),
        degenerate: true,
    }
}
