//! Property-based tests for the closed-form root solvers

use num_complex::Complex64;
use numviz_math::format::format_root_set;
use numviz_math::roots::*;
use proptest::prelude::*;

/// Strategy for small non-zero leading coefficients
fn leading_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![-9i32..=-1, 1i32..=9].prop_map(f64::from)
}

/// Strategy for small integer coefficients
fn coeff_strategy() -> impl Strategy<Value = f64> {
    (-10i32..=10).prop_map(f64::from)
}

/// Strategy for `k` distinct integer roots
fn distinct_roots(k: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::sample::subsequence((-3i32..=3).collect::<Vec<_>>(), k)
        .prop_map(|roots| roots.into_iter().map(f64::from).collect())
}

/// Coefficients of `Π (x - r)`, highest degree first
fn expand(roots: &[f64]) -> Vec<f64> {
    let mut coeffs = vec![1.0];
    for &r in roots {
        let mut next = vec![0.0; coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * r;
        }
        coeffs = next;
    }
    coeffs
}

fn near(roots: &RootSet, target: f64, tol: f64) -> bool {
    roots
        .iter()
        .any(|r| (r - Complex64::new(target, 0.0)).norm() < tol)
}

#[cfg(test)]
mod quadratic_properties {
    use super::*;

    proptest! {
        /// A non-degenerate quadratic always has two roots
        #[test]
        fn two_roots(a in leading_strategy(), b in coeff_strategy(), c in coeff_strategy()) {
            let roots = solve(2, &[a, b, c]).expect("valid quadratic");
            prop_assert_eq!(roots.len(), 2);
        }

        /// Non-real roots come as a conjugate pair, positive imaginary first
        #[test]
        fn conjugate_pair(a in leading_strategy(), b in coeff_strategy(), c in coeff_strategy()) {
            let roots = solve(2, &[a, b, c]).expect("valid quadratic");
            let (r1, r2) = (roots.as_slice()[0], roots.as_slice()[1]);
            if r1.im.abs() > TOLERANCE {
                prop_assert!(r1.im > 0.0);
                prop_assert!(approx_eq(r1.conj(), r2, 1e-12));
            } else {
                prop_assert!(r2.im.abs() < TOLERANCE);
            }
        }

        /// Vieta: r1 + r2 = -b/a and r1·r2 = c/a
        #[test]
        fn vieta(a in leading_strategy(), b in coeff_strategy(), c in coeff_strategy()) {
            let roots = solve(2, &[a, b, c]).expect("valid quadratic");
            let (r1, r2) = (roots.as_slice()[0], roots.as_slice()[1]);
            prop_assert!((r1 + r2 - Complex64::new(-b / a, 0.0)).norm() < 1e-9);
            prop_assert!((r1 * r2 - Complex64::new(c / a, 0.0)).norm() < 1e-9);
        }
    }
}

#[cfg(test)]
mod cubic_properties {
    use super::*;

    proptest! {
        /// The three roots sum to -b/a
        #[test]
        fn root_sum(
            a in leading_strategy(),
            b in coeff_strategy(),
            c in coeff_strategy(),
            d in coeff_strategy()
        ) {
            let roots = solve(3, &[a, b, c, d]).expect("valid cubic");
            prop_assert_eq!(roots.len(), 3);
            let sum: Complex64 = roots.iter().sum();
            prop_assert!((sum - Complex64::new(-b / a, 0.0)).norm() < 1e-6);
        }

        /// Known distinct real roots are recovered
        #[test]
        fn recovers_roots(expected in distinct_roots(3)) {
            let poly = Polynomial::new(expand(&expected)).expect("valid cubic");
            let roots = RootSolver::default_config().solve(&poly).expect("solve");
            for r in &expected {
                prop_assert!(near(&roots, *r, 1e-6), "{} not in {:?}", r, roots);
            }
        }
    }
}

#[cfg(test)]
mod quartic_properties {
    use super::*;

    proptest! {
        /// Known distinct real roots are recovered and residuals vanish
        #[test]
        fn recovers_roots(expected in distinct_roots(4)) {
            let poly = Polynomial::new(expand(&expected)).expect("valid quartic");
            let roots = RootSolver::default_config().solve(&poly).expect("solve");
            prop_assert_eq!(roots.len(), 4);
            for r in &expected {
                prop_assert!(near(&roots, *r, 1e-4), "{} not in {:?}", r, roots);
            }
            for r in &roots {
                prop_assert!(poly.evaluate(*r).norm() < 1e-3);
            }
        }

        /// Formatting lists one line per distinct root
        #[test]
        fn formatted_lines(expected in distinct_roots(4)) {
            let roots = solve(4, &expand(&expected)).expect("solve");
            let latex = format_root_set(&roots);
            prop_assert_eq!(latex.matches("x_{").count(), 4);
            prop_assert!(!latex.contains("frac"), "{}", latex);
        }
    }
}
