//! Tests for automated search strategies

#[cfg(test)]
mod tests {
    use bayes_rescue::math::Priors;
    use bayes_rescue::session::{Action, ActionSelector, SessionSnapshot, StrategyPolicy};
    use bayes_rescue::spatial::RegionId;

    fn priors(values: [f64; 3]) -> Priors {
        Priors::new(values).unwrap_or_else(|e| unreachable!("valid priors rejected: {e}"))
    }

    // Tests the most probable area is searched twice
    #[test]
    fn test_highest_probability_choice() {
        let policy = StrategyPolicy::HighestProbability;

        assert_eq!(
            policy.choose(&priors([0.6, 0.3, 0.1])),
            Action::SearchTwice(RegionId::One)
        );
        assert_eq!(
            policy.choose(&Priors::default()),
            Action::SearchTwice(RegionId::Two)
        );
        assert_eq!(
            policy.choose(&priors([0.1, 0.2, 0.7])),
            Action::SearchTwice(RegionId::Three)
        );
    }

    // Tests the pair with the largest combined probability is searched
    #[test]
    fn test_joint_probability_choice() {
        let policy = StrategyPolicy::JointProbability;

        assert_eq!(
            policy.choose(&priors([0.6, 0.3, 0.1])),
            Action::SearchPair(RegionId::One, RegionId::Two)
        );
        assert_eq!(
            policy.choose(&Priors::default()),
            Action::SearchPair(RegionId::Two, RegionId::Three)
        );
        assert_eq!(
            policy.choose(&priors([0.45, 0.1, 0.45])),
            Action::SearchPair(RegionId::One, RegionId::Three)
        );
    }

    // Tests ties go to the lowest area or earliest pair
    #[test]
    fn test_tie_breaking() {
        let even = priors([0.4, 0.4, 0.2]);
        let third = 1.0 / 3.0;
        let uniform = priors([third, third, third]);

        assert_eq!(
            StrategyPolicy::HighestProbability.choose(&even),
            Action::SearchTwice(RegionId::One)
        );
        assert_eq!(
            StrategyPolicy::HighestProbability.choose(&uniform),
            Action::SearchTwice(RegionId::One)
        );
        assert_eq!(
            StrategyPolicy::JointProbability.choose(&uniform),
            Action::SearchPair(RegionId::One, RegionId::Two)
        );
    }

    // Tests exhausted areas are passed over when selecting automatically
    #[test]
    fn test_exhausted_areas_skipped() {
        let beliefs = priors([0.6, 0.3, 0.1]);
        let exhausted = [true, false, false];

        assert_eq!(
            StrategyPolicy::HighestProbability.choose_available(&beliefs, exhausted),
            Action::SearchTwice(RegionId::Two)
        );
        assert_eq!(
            StrategyPolicy::JointProbability.choose_available(&beliefs, exhausted),
            Action::SearchPair(RegionId::Two, RegionId::Three)
        );
        assert_eq!(
            StrategyPolicy::HighestProbability.choose_available(&beliefs, [true; 3]),
            Action::SearchTwice(RegionId::One)
        );
    }

    // Tests the selector interface uses the snapshot's state
    #[test]
    fn test_selector_uses_snapshot() {
        let snapshot = SessionSnapshot {
            round: 4,
            priors: priors([0.2, 0.1, 0.7]),
            exhausted: [false, false, true],
        };
        let mut policy = StrategyPolicy::HighestProbability;

        assert_eq!(policy.select(&snapshot), Action::SearchTwice(RegionId::One));
    }

    // Tests report names
    #[test]
    fn test_names() {
        assert_eq!(
            StrategyPolicy::HighestProbability.to_string(),
            "highest-probability"
        );
        assert_eq!(StrategyPolicy::JointProbability.name(), "joint-probability");
    }
}
