//! Commands accepted by a search session

use std::fmt;

use crate::io::error::{Result, invalid_parameter};
use crate::math::bayes::Priors;
use crate::math::probability::repeated_detection;
use crate::search::effectiveness::EffectivenessVector;
use crate::spatial::region::RegionId;

/// One operator or policy decision for the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Search one area twice in the same round
    SearchTwice(RegionId),
    /// Search two different areas once each
    SearchPair(RegionId, RegionId),
    /// Abandon the session and start a fresh one
    Restart,
    /// End the session without a result
    Quit,
}

impl Action {
    /// Search two areas once each
    ///
    /// # Errors
    ///
    /// Returns an error if both areas are the same
    pub fn pair(first: RegionId, second: RegionId) -> Result<Self> {
        if first == second {
            return Err(invalid_parameter(
                "action",
                &format!("areas {first} & {second}"),
                &"a paired search needs two different areas; search one area twice instead",
            ));
        }
        Ok(Self::SearchPair(first, second))
    }

    /// Decode an operator menu number
    ///
    /// 0 quits, 1-3 search that area twice, 4-6 search areas 1&2, 1&3 and
    /// 2&3, and 7 starts over.
    ///
    /// # Errors
    ///
    /// Returns an error for any other code
    pub fn from_menu_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Quit),
            1..=3 => RegionId::try_from(code).map(Self::SearchTwice),
            4 => Ok(Self::SearchPair(RegionId::One, RegionId::Two)),
            5 => Ok(Self::SearchPair(RegionId::One, RegionId::Three)),
            6 => Ok(Self::SearchPair(RegionId::Two, RegionId::Three)),
            7 => Ok(Self::Restart),
            _ => Err(invalid_parameter(
                "menu_code",
                &code,
                &"menu choices run from 0 to 7",
            )),
        }
    }

    /// Menu number for this action, if it has one
    pub const fn menu_code(&self) -> Option<u8> {
        match self {
            Self::Quit => Some(0),
            Self::SearchTwice(region) => Some(region.number()),
            Self::SearchPair(a, b) => match (*a, *b) {
                (RegionId::One, RegionId::Two) | (RegionId::Two, RegionId::One) => Some(4),
                (RegionId::One, RegionId::Three) | (RegionId::Three, RegionId::One) => Some(5),
                (RegionId::Two, RegionId::Three) | (RegionId::Three, RegionId::Two) => Some(6),
                _ => None,
            },
            Self::Restart => Some(7),
        }
    }

    /// Areas searched by each search event, in execution order
    pub fn search_events(&self) -> Vec<RegionId> {
        match *self {
            Self::SearchTwice(region) => vec![region, region],
            Self::SearchPair(a, b) => vec![a, b],
            Self::Restart | Self::Quit => Vec::new(),
        }
    }

    /// Distinct areas the action searches
    pub fn searched_regions(&self) -> Vec<RegionId> {
        let mut regions = self.search_events();
        regions.sort_unstable();
        regions.dedup();
        regions
    }

    /// Whether the action runs a search round
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::SearchTwice(_) | Self::SearchPair(..))
    }

    /// Chance this action finds the target given current beliefs
    ///
    /// Searching an area twice detects with `p (1 - (1 - sep)^2)`; a pair
    /// adds the single-search detection of both areas.
    pub fn detection_probability(&self, priors: &Priors, effectiveness: &EffectivenessVector) -> f64 {
        match *self {
            Self::SearchTwice(region) => {
                priors.get(region) * repeated_detection(effectiveness.get(region).value(), 2)
            }
            Self::SearchPair(a, b) if a != b => [a, b]
                .iter()
                .map(|&region| priors.get(region) * effectiveness.get(region).value())
                .sum(),
            _ => 0.0,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchTwice(region) => write!(f, "Search Area {region} twice"),
            Self::SearchPair(a, b) => write!(f, "Search Areas {a} & {b}"),
            Self::Restart => write!(f, "Start Over"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}
