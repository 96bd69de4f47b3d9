//! Tests for effectiveness validation and per-round draws

#[cfg(test)]
mod tests {
    use bayes_rescue::AlgorithmError;
    use bayes_rescue::search::{Effectiveness, EffectivenessRange, EffectivenessVector};
    use bayes_rescue::spatial::RegionId;
    use rand::{SeedableRng, rngs::StdRng};

    // Tests values outside the unit interval are rejected rather than clamped
    #[test]
    fn test_effectiveness_bounds() {
        assert!(Effectiveness::new(0.0).is_ok());
        assert!(Effectiveness::new(1.0).is_ok());
        assert!(matches!(
            Effectiveness::new(-0.01),
            Err(AlgorithmError::InvalidParameter {
                parameter: "effectiveness",
                ..
            })
        ));
        assert!(Effectiveness::new(1.01).is_err());
        assert!(Effectiveness::new(f64::NAN).is_err());
    }

    // Tests the cell quota rounds down
    #[test]
    fn test_cell_quota() {
        let half = Effectiveness::new(0.5).unwrap_or_default();
        let quarter = Effectiveness::new(0.25).unwrap_or_default();

        assert_eq!(half.cell_quota(2500), 1250);
        assert_eq!(quarter.cell_quota(2500), 625);
        assert_eq!(half.cell_quota(7), 3);
        assert_eq!(Effectiveness::FULL.cell_quota(2500), 2500);
        assert_eq!(Effectiveness::NONE.cell_quota(2500), 0);
    }

    // Tests coverage fractions
    #[test]
    fn test_from_coverage() {
        assert!((Effectiveness::from_coverage(1250, 2500).value() - 0.5).abs() < f64::EPSILON);
        assert!((Effectiveness::from_coverage(2500, 2500).value() - 1.0).abs() < f64::EPSILON);
        assert!(Effectiveness::from_coverage(3, 0).value().abs() < f64::EPSILON);
    }

    // Tests the vector validates every entry
    #[test]
    fn test_vector_validation() {
        assert!(EffectivenessVector::new([0.0, 0.6, 0.0]).is_ok());
        assert!(EffectivenessVector::new([0.0, 0.6, 1.5]).is_err());

        let mut vector = EffectivenessVector::ZERO;
        vector.set(RegionId::Three, Effectiveness::FULL);
        assert_eq!(vector.values(), [0.0, 0.0, 1.0]);
    }

    // Tests draws land in range for searched areas and stay zero elsewhere
    #[test]
    fn test_draw_for_selected_regions() {
        let range = EffectivenessRange::default();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..500 {
            let vector = range.draw_for(&[RegionId::One, RegionId::Three], &mut rng);
            let [e1, e2, e3] = vector.values();
            assert!((0.2..=0.9).contains(&e1));
            assert!(e2.abs() < f64::EPSILON);
            assert!((0.2..=0.9).contains(&e3));
        }
    }

    // Tests custom ranges are validated
    #[test]
    fn test_range_validation() {
        assert!(EffectivenessRange::new(0.9, 0.2).is_err());
        assert!(EffectivenessRange::new(0.0, 1.2).is_err());

        let Ok(fixed) = EffectivenessRange::new(0.4, 0.4) else {
            unreachable!("equal bounds are a valid range");
        };
        let mut rng = StdRng::seed_from_u64(9);
        assert!((fixed.draw(&mut rng).value() - 0.4).abs() < f64::EPSILON);
        assert!((fixed.low() - fixed.high()).abs() < f64::EPSILON);
    }
}
