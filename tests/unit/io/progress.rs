//! Tests for experiment progress tracking

#[cfg(test)]
mod tests {
    use bayes_rescue::io::progress::ProgressManager;
    use bayes_rescue::session::StrategyPolicy;

    // Tests bars are tracked per policy and advance independently
    #[test]
    fn test_policy_bars() {
        let mut manager = ProgressManager::hidden();

        let highest = manager.start_policy(StrategyPolicy::HighestProbability, 10);
        let joint = manager.start_policy(StrategyPolicy::JointProbability, 10);
        highest.inc(3);
        joint.inc(7);

        assert_eq!(manager.position(StrategyPolicy::HighestProbability), Some(3));
        assert_eq!(manager.position(StrategyPolicy::JointProbability), Some(7));
        assert_eq!(highest.length(), Some(10));
    }

    // Tests an unstarted policy has no position
    #[test]
    fn test_unknown_policy() {
        let manager = ProgressManager::hidden();

        assert_eq!(manager.position(StrategyPolicy::JointProbability), None);
    }

    // Tests completing a policy finishes its bar
    #[test]
    fn test_complete_policy() {
        let mut manager = ProgressManager::hidden();
        let bar = manager.start_policy(StrategyPolicy::HighestProbability, 4);

        bar.inc(4);
        manager.complete_policy(StrategyPolicy::HighestProbability, 2.5);
        manager.finish();

        assert!(bar.is_finished());
        assert_eq!(bar.message(), "✓ mean 2.500");
    }
}
