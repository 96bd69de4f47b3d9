//! Simulation constants and runtime configuration defaults

// Starting belief about where the sailor went down
/// Default target probability for search areas 1, 2 and 3
pub const DEFAULT_PRIORS: [f64; 3] = [0.2, 0.5, 0.3];

/// Default width of every search area in cells
pub const DEFAULT_REGION_WIDTH: usize = 50;
/// Default height of every search area in cells
pub const DEFAULT_REGION_HEIGHT: usize = 50;

// Search effectiveness is drawn uniformly in this range for each searched area
/// Lowest search effectiveness a single search can achieve
pub const MIN_SEARCH_EFFECTIVENESS: f64 = 0.2;
/// Highest search effectiveness a single search can achieve
pub const MAX_SEARCH_EFFECTIVENESS: f64 = 0.9;

/// Allowed deviation of a probability vector's sum from 1.0
pub const PRIOR_SUM_TOLERANCE: f64 = 1e-6;

/// Denominator substituted when a Bayesian revision underflows
pub const DEGENERATE_EPSILON: f64 = 1e-9;

// Target placement skews toward the middle area
/// Lower bound of the triangular area draw
pub const PLACEMENT_LOW: f64 = 1.0;
/// Upper bound of the triangular area draw (exclusive after truncation)
pub const PLACEMENT_HIGH: f64 = 4.0;
/// Mode of the triangular area draw
pub const PLACEMENT_MODE: f64 = 2.5;

// Default values for configurable parameters
/// Fixed seed for reproducible experiments
pub const DEFAULT_SEED: u64 = 42;

/// Default number of sessions simulated per policy
pub const DEFAULT_SESSIONS: usize = 400;

// Keeps automated sessions from spinning on a region they cannot make progress in
/// Default round cap for automated sessions
pub const DEFAULT_MAX_ROUNDS: usize = 500;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Maximum progress redraws per second
pub const PROGRESS_REFRESH_HZ: u8 = 15;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "bayes_rescue=debug";
