//! LaTeX formatting of roots.
//!
//! Components are shown as integers when they are within the tolerance of
//! one, otherwise as a reduced fraction on a fixed 1/10000 grid. This is an
//! approximation: digits beyond the fourth decimal place are rounded away.

use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::Signed;

use crate::roots::{RootSet, TOLERANCE};

/// Denominator of the rational approximation grid.
pub const FRACTION_GRID: i64 = 10_000;

/// Format one real component.
pub fn format_component(x: f64) -> String {
    if x.abs() < TOLERANCE {
        return "0".to_string();
    }

    let nearest = x.round();
    if (x - nearest).abs() < TOLERANCE {
        return format!("{:.0}", nearest);
    }

    // Scale the exact binary value so large components keep every digit.
    let Some(exact) = BigRational::from_float(x) else {
        return x.to_string();
    };
    let grid = BigInt::from(FRACTION_GRID);
    let numerator = (exact * grid.clone()).round().to_integer();
    let ratio = BigRational::new(numerator, grid);
    if ratio.is_integer() {
        return ratio.numer().to_string();
    }

    let sign = if ratio.is_negative() { "-" } else { "" };
    format!(
        "{}\\frac{{{}}}{{{}}}",
        sign,
        ratio.numer().abs(),
        ratio.denom()
    )
}

/// Format a possibly complex root.
///
/// An imaginary magnitude of one drops its coefficient and a zero real part
/// is left out entirely.
pub fn format_root(root: Complex64) -> String {
    if root.im.abs() < TOLERANCE {
        return format_component(root.re);
    }

    let magnitude = root.im.abs();
    let imaginary = if (magnitude - 1.0).abs() < TOLERANCE {
        "i".to_string()
    } else {
        format!("{}i", format_component(magnitude))
    };

    if root.re.abs() < TOLERANCE {
        if root.im < 0.0 {
            format!("-{}", imaginary)
        } else {
            imaginary
        }
    } else {
        let sign = if root.im < 0.0 { '-' } else { '+' };
        format!("{} {} {}", format_component(root.re), sign, imaginary)
    }
}

/// Render distinct roots as `x_1 = …` lines joined by LaTeX line breaks.
pub fn format_root_set(roots: &RootSet) -> String {
    let distinct = roots.distinct(TOLERANCE);
    if distinct.is_empty() {
        return "\\text{No solution}".to_string();
    }

    distinct
        .iter()
        .enumerate()
        .map(|(i, root)| format!("x_{{{}}} = {}", i + 1, format_root(*root)))
        .collect::<Vec<_>>()
        .join(" \\\\ ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_integers() {
        assert_eq!(format_component(2.0), "2");
        assert_eq!(format_component(-3.0000000001), "-3");
        assert_eq!(format_component(1e-12), "0");
        assert_eq!(format_component(-1e-12), "0");
    }

    #[test]
    fn test_component_fractions() {
        assert_eq!(format_component(0.5), "\\frac{1}{2}");
        assert_eq!(format_component(-0.25), "-\\frac{1}{4}");
        assert_eq!(format_component(1.0 / 3.0), "\\frac{3333}{10000}");
        assert_eq!(format_component(2.75), "\\frac{11}{4}");
    }

    #[test]
    fn test_component_large_fraction() {
        // x * 10000 is past i64::MAX here
        let root = crate::roots::solve(1, &[1.0, -1e15 - 0.5]).expect("solve failed");
        assert_eq!(
            format_component(root.as_slice()[0].re),
            "\\frac{2000000000000001}{2}"
        );
        assert_eq!(
            format_component(-1.5e15 - 0.25),
            "-\\frac{6000000000000001}{4}"
        );
    }

    #[test]
    fn test_component_grid_rounds_to_integer() {
        // 1.99999 rounds onto the grid at 2
        assert_eq!(format_component(1.99999), "2");
    }

    #[test]
    fn test_root_real_and_imaginary() {
        assert_eq!(format_root(Complex64::new(0.5, 0.0)), "\\frac{1}{2}");
        assert_eq!(format_root(Complex64::new(2.0, 0.0)), "2");
        assert_eq!(format_root(Complex64::new(0.0, 1.0)), "i");
        assert_eq!(format_root(Complex64::new(0.0, -1.0)), "-i");
        assert_eq!(format_root(Complex64::new(1.0, -1.0)), "1 - i");
        assert_eq!(format_root(Complex64::new(-1.0, 2.0)), "-1 + 2i");
        assert_eq!(
            format_root(Complex64::new(0.5, -0.5)),
            "\\frac{1}{2} - \\frac{1}{2}i"
        );
        assert_eq!(format_root(Complex64::new(0.0, -3.0)), "-3i");
    }

    #[test]
    fn test_root_set() {
        let roots = RootSet::new(vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(-0.5, 0.0),
        ]);
        assert_eq!(format_root_set(&roots), "x_{1} = 1 \\\\ x_{2} = -\\frac{1}{2}");
        assert_eq!(format_root_set(&RootSet::default()), "\\text{No solution}");
    }
}
