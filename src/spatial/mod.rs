//! Search area geometry and per-area search history

/// Accumulated searched cells per area
pub mod history;
/// Rectangular search areas, identities and local coordinates
pub mod region;

pub use history::SearchHistory;
pub use region::{Cell, Region, RegionId};
