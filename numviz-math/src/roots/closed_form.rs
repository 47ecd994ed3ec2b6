//! Closed-form solvers for polynomials of degree one to four.
//!
//! Every solver takes the coefficients highest degree first and a tolerance.
//! A leading coefficient smaller than the tolerance hands the remaining
//! coefficients to the next lower degree.
//!
//! ## References
//!
//! - Cardano, "Ars Magna" (1545) for the cubic
//! - Ferrari's method with the resolvent cubic for the quartic

use std::f64::consts::PI;

use num_complex::Complex64;
use tracing::{debug, trace};

use crate::error::{MathError, MathResult};

/// `a·x + b = 0`.
pub(crate) fn linear(a: f64, b: f64, tol: f64) -> Vec<Complex64> {
    if a.abs() < tol {
        return Vec::new();
    }
    vec![Complex64::new(-b / a, 0.0)]
}

/// `a·x² + b·x + c = 0`.
///
/// Always yields two roots when `a` is non-degenerate, even for a double
/// root: merging happens when the roots are displayed.
pub(crate) fn quadratic(a: f64, b: f64, c: f64, tol: f64) -> Vec<Complex64> {
    if a.abs() < tol {
        debug!("quadratic leading coefficient vanished, solving as linear");
        return linear(b, c, tol);
    }

    let disc = b * b - 4.0 * a * c;
    if disc >= 0.0 {
        let sq = disc.sqrt();
        vec![
            Complex64::new((-b + sq) / (2.0 * a), 0.0),
            Complex64::new((-b - sq) / (2.0 * a), 0.0),
        ]
    } else {
        let re = -b / (2.0 * a);
        let im = ((-disc).sqrt() / (2.0 * a)).abs();
        vec![Complex64::new(re, im), Complex64::new(re, -im)]
    }
}

/// `a·x³ + b·x² + c·x + d = 0`.
pub(crate) fn cubic(a: f64, b: f64, c: f64, d: f64, tol: f64) -> Vec<Complex64> {
    if a.abs() < tol {
        debug!("cubic leading coefficient vanished, solving as quadratic");
        return quadratic(b, c, d, tol);
    }

    let (b, c, d) = (b / a, c / a, d / a);

    // x = t - b/3 gives t³ + p·t + q = 0
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let shift = -b / 3.0;

    let disc = (q / 2.0).powi(2) + (p / 3.0).powi(3);
    trace!(p, q, disc, "depressed cubic");

    if disc >= 0.0 {
        let sd = disc.sqrt();
        let u = (-q / 2.0 + sd).cbrt();
        let v = (-q / 2.0 - sd).cbrt();

        let re = -(u + v) / 2.0;
        let im = (u - v) * 3f64.sqrt() / 2.0;
        vec![
            Complex64::new(u + v + shift, 0.0),
            Complex64::new(re + shift, im),
            Complex64::new(re + shift, -im),
        ]
    } else {
        // Three distinct real roots; p < 0 here so rho > 0.
        let rho = (-p * p * p / 27.0).sqrt();
        let theta = (-q / (2.0 * rho)).clamp(-1.0, 1.0).acos();
        let r = 2.0 * rho.cbrt();
        (0..3)
            .map(|k| {
                let angle = (theta + 2.0 * PI * k as f64) / 3.0;
                Complex64::new(r * angle.cos() + shift, 0.0)
            })
            .collect()
    }
}

/// `a·x⁴ + b·x³ + c·x² + d·x + e = 0`.
///
/// Ferrari's method. The resolvent root used for the split is the largest
/// real one, which guarantees `y - p >= 0`.
pub(crate) fn quartic(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    tol: f64,
) -> MathResult<Vec<Complex64>> {
    if a.abs() < tol {
        debug!("quartic leading coefficient vanished, solving as cubic");
        return Ok(cubic(b, c, d, e, tol));
    }

    let (b, c, d, e) = (b / a, c / a, d / a, e / a);

    // x = t - b/4 gives t⁴ + p·t² + q·t + r = 0
    let b2 = b * b;
    let p = c - 3.0 * b2 / 8.0;
    let q = d - b * c / 2.0 + b2 * b / 8.0;
    let r = e - b * d / 4.0 + b2 * c / 16.0 - 3.0 * b2 * b2 / 256.0;
    let shift = -b / 4.0;
    trace!(p, q, r, "depressed quartic");

    let depressed = if q.abs() < tol {
        // t⁴ + p·t² + r is a quadratic in t²; the resolvent split would need
        // y = p exactly here.
        debug!("biquadratic quartic");
        quadratic(1.0, p, r, tol)
            .into_iter()
            .flat_map(|u| {
                let s = u.sqrt();
                [s, -s]
            })
            .collect::<Vec<_>>()
    } else {
        let resolvent = cubic(1.0, -p, -4.0 * r, 4.0 * p * r - q * q, tol);
        let y = select_resolvent_root(&resolvent, tol)?;
        debug!(y, candidates = resolvent.len(), "selected resolvent root");

        let m_sq = y - p;
        let m = if m_sq > 0.0 { m_sq.sqrt() } else { 0.0 };
        let n = if m.abs() > tol { q / (2.0 * m) } else { 0.0 };

        let mut roots = quadratic(1.0, m, y / 2.0 - n, tol);
        roots.extend(quadratic(1.0, -m, y / 2.0 + n, tol));
        roots
    };

    Ok(depressed
        .into_iter()
        .map(|t| t + Complex64::new(shift, 0.0))
        .collect())
}

/// Largest real root of the resolvent cubic; ties keep the earliest.
fn select_resolvent_root(roots: &[Complex64], tol: f64) -> MathResult<f64> {
    let mut best: Option<f64> = None;
    for root in roots {
        if root.im.abs() >= tol || !root.re.is_finite() {
            continue;
        }
        match best {
            Some(current) if root.re <= current => {}
            _ => best = Some(root.re),
        }
    }
    best.ok_or(MathError::NoRealResolventRoot)
}
