//! Property-based tests for the arbitrary-precision engine

use numviz_math::error::MathError;
use numviz_math::precision::*;
use proptest::prelude::*;

fn operand_strategy() -> impl Strategy<Value = u32> {
    1u32..=10_000
}

fn digits_strategy() -> impl Strategy<Value = usize> {
    10usize..80
}

#[cfg(test)]
mod sqrt_properties {
    use super::*;

    proptest! {
        /// The truncated root squares back to the operand
        #[test]
        fn squares_back(n in operand_strategy(), digits in digits_strategy()) {
            let value = compute(Task::Sqrt, Some(n), digits).expect("in bounds");
            let root: f64 = value.parse().expect("decimal string");
            prop_assert!((root * root - n as f64).abs() < 1e-9 * n as f64);
        }

        /// Exactly `digits` places after the point
        #[test]
        fn digit_count(n in operand_strategy(), digits in digits_strategy()) {
            let value = compute(Task::Sqrt, Some(n), digits).expect("in bounds");
            let (_, fraction) = value.split_once('.').expect("decimal point");
            prop_assert_eq!(fraction.len(), digits);
        }

        /// More digits only extend the shorter answer
        #[test]
        fn longer_extends_shorter(n in operand_strategy(), digits in 10usize..40) {
            let short = compute(Task::Sqrt, Some(n), digits).expect("in bounds");
            let long = compute(Task::Sqrt, Some(n), digits + 10).expect("in bounds");
            prop_assert!(long.starts_with(&short), "{} vs {}", short, long);
        }

        /// Operands outside 1..=10000 are rejected
        #[test]
        fn operand_bounds(n in 10_001u32..100_000) {
            let err = compute(Task::Sqrt, Some(n), 20);
            let is_invalid_operand = matches!(err, Err(MathError::InvalidOperand { .. }));
            prop_assert!(is_invalid_operand);
        }
    }
}

#[cfg(test)]
mod constant_properties {
    use super::*;

    proptest! {
        /// Constants agree with their f64 values
        #[test]
        fn match_f64(digits in digits_strategy()) {
            let cases = [
                (Task::Pi, std::f64::consts::PI),
                (Task::E, std::f64::consts::E),
                (Task::Phi, (1.0 + 5f64.sqrt()) / 2.0),
            ];
            for (task, expected) in cases {
                let value: f64 = compute(task, None, digits)
                    .expect("in bounds")
                    .parse()
                    .expect("decimal string");
                prop_assert!((value - expected).abs() < 1e-9, "{}", task);
            }
        }

        /// Digit counts below the minimum are rejected before anything runs
        #[test]
        fn digit_bounds(digits in 0usize..10) {
            for task in Task::ALL {
                let err = compute(task, Some(2), digits);
                let is_out_of_range = matches!(err, Err(MathError::OutOfRange { .. }));
                prop_assert!(is_out_of_range);
            }
        }
    }
}
