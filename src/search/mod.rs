//! Target placement and the stochastic search simulation

/// Validated effectiveness values and per-round draws
pub mod effectiveness;
/// Random placement of the hidden target
pub mod placement;
/// Single search events over an area
pub mod simulator;

pub use effectiveness::{Effectiveness, EffectivenessRange, EffectivenessVector};
pub use placement::{Target, TargetPlacer};
pub use simulator::{SearchOutcome, SearchReport, search};
