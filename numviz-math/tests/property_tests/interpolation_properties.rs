//! Property-based tests for sequence interpolation

use numviz_math::error::MathError;
use numviz_math::interpolation::*;
use proptest::prelude::*;

fn coeff_strategy() -> impl Strategy<Value = i64> {
    -10i64..=10
}

#[cfg(test)]
mod interpolation_basic_properties {
    use super::*;

    proptest! {
        /// The polynomial passes through every sample
        #[test]
        fn reproduces_samples(values in prop::collection::vec(-100i32..100, 1..=6)) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let poly = interpolate(&values);
            for (i, v) in values.iter().enumerate() {
                prop_assert!((poly.evaluate((i + 1) as f64) - v).abs() < 1e-6);
            }
        }

        /// Degree never exceeds the number of samples minus one
        #[test]
        fn degree_bound(values in prop::collection::vec(-100i32..100, 1..=6)) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let degree = interpolate(&values).degree().expect("non-empty");
            prop_assert!(degree < values.len());
        }

        /// A quadratic sequence is continued exactly
        #[test]
        fn continues_quadratics(a in coeff_strategy(), b in coeff_strategy(), c in coeff_strategy()) {
            let term = |n: i64| a * n * n + b * n + c;
            let values: Vec<f64> = (1..=4).map(|n| term(n) as f64).collect();
            let report = SequencePredictor::default_config()
                .predict(&values)
                .expect("within sample limit");
            let expected: Vec<f64> = (5..=9).map(|n| term(n) as f64).collect();
            prop_assert_eq!(report.predictions, expected);
        }

        /// Too many samples are rejected
        #[test]
        fn sample_limit(values in prop::collection::vec(-100i32..100, 7..12)) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let result = SequencePredictor::default_config().predict(&values);
            let too_many = matches!(result, Err(MathError::TooManySamples { .. }));
            prop_assert!(too_many);
        }
    }
}
