//! Tests for simulation defaults

#[cfg(test)]
mod tests {
    use bayes_rescue::io::configuration::{
        DEFAULT_MAX_ROUNDS, DEFAULT_PRIORS, DEFAULT_REGION_HEIGHT, DEFAULT_REGION_WIDTH,
        DEFAULT_SESSIONS, DEGENERATE_EPSILON, MAX_SEARCH_EFFECTIVENESS, MIN_SEARCH_EFFECTIVENESS,
        PLACEMENT_HIGH, PLACEMENT_LOW, PLACEMENT_MODE, PRIOR_SUM_TOLERANCE,
    };

    // Tests the default belief is a probability distribution
    #[test]
    fn test_default_priors_sum_to_one() {
        let sum: f64 = DEFAULT_PRIORS.iter().sum();

        assert!((sum - 1.0).abs() < PRIOR_SUM_TOLERANCE);
        assert!(DEFAULT_PRIORS.iter().all(|&p| p >= 0.0));
    }

    // Tests the effectiveness bounds form a valid sub-range of [0, 1]
    #[test]
    fn test_effectiveness_bounds() {
        assert!(MIN_SEARCH_EFFECTIVENESS > 0.0);
        assert!(MIN_SEARCH_EFFECTIVENESS < MAX_SEARCH_EFFECTIVENESS);
        assert!(MAX_SEARCH_EFFECTIVENESS <= 1.0);
    }

    // Tests the placement draw maps onto exactly three areas
    #[test]
    fn test_placement_bounds() {
        assert!(PLACEMENT_LOW < PLACEMENT_MODE && PLACEMENT_MODE < PLACEMENT_HIGH);
        assert!((PLACEMENT_HIGH - PLACEMENT_LOW - 3.0).abs() < f64::EPSILON);
    }

    // Tests run-size defaults are usable
    #[test]
    fn test_run_defaults() {
        assert!(DEFAULT_REGION_WIDTH > 0 && DEFAULT_REGION_HEIGHT > 0);
        assert!(DEFAULT_SESSIONS > 0);
        assert!(DEFAULT_MAX_ROUNDS > 0);
        assert!(DEGENERATE_EPSILON > 0.0 && DEGENERATE_EPSILON < PRIOR_SUM_TOLERANCE);
    }
}
