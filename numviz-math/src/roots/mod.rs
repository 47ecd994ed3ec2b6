//! Polynomial Root Solving.
//!
//! Closed-form roots for real polynomials of degree one through four.
//!
//! ## Degree reduction
//!
//! A leading coefficient whose magnitude is below the solver tolerance is
//! treated as zero and the polynomial is handed to the next lower degree.
//! This is not reported as an error.
//!
//! ## Root sets
//!
//! Solvers return every root the formula produces, so a double root shows up
//! twice. [`RootSet::distinct`] merges roots that agree within the tolerance
//! before they are displayed.

mod closed_form;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MathError, MathResult};

/// Tolerance used for zero tests and root equality.
pub const TOLERANCE: f64 = 1e-9;

/// Highest supported polynomial degree.
pub const MAX_DEGREE: usize = 4;

/// Two roots are equal when both components differ by less than `tol`.
#[inline]
pub fn approx_eq(a: Complex64, b: Complex64, tol: f64) -> bool {
    (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol
}

/// A real polynomial of degree 1..=4, coefficients highest degree first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from its coefficients (highest degree first).
    pub fn new(coefficients: Vec<f64>) -> MathResult<Self> {
        if coefficients.len() < 2 || coefficients.len() > MAX_DEGREE + 1 {
            return Err(MathError::InvalidDegree(coefficients.len().saturating_sub(1)));
        }
        Self::check_finite(&coefficients)?;
        Ok(Self { coefficients })
    }

    /// Create a polynomial of a declared degree, checking the coefficient count.
    pub fn with_degree(degree: usize, coefficients: &[f64]) -> MathResult<Self> {
        if !(1..=MAX_DEGREE).contains(&degree) {
            return Err(MathError::InvalidDegree(degree));
        }
        if coefficients.len() != degree + 1 {
            return Err(MathError::CoefficientCount {
                degree,
                expected: degree + 1,
                got: coefficients.len(),
            });
        }
        Self::new(coefficients.to_vec())
    }

    fn check_finite(coefficients: &[f64]) -> MathResult<()> {
        match coefficients.iter().position(|c| !c.is_finite()) {
            Some(i) => Err(MathError::NonNumericInput {
                field: format!("coefficient {}", i + 1),
                value: coefficients[i].to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Declared degree (the leading coefficient may still be near zero).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluate at a complex point (Horner's scheme).
    pub fn evaluate(&self, z: Complex64) -> Complex64 {
        self.coefficients
            .iter()
            .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
    }
}

/// Roots produced by one solve, in solver order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootSet {
    roots: Vec<Complex64>,
}

impl RootSet {
    /// Wrap a list of roots.
    pub fn new(roots: Vec<Complex64>) -> Self {
        Self { roots }
    }

    /// Number of roots, counting repeats.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True when the solver found nothing representable.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterate over the roots.
    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.roots.iter()
    }

    /// Roots as a slice.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.roots
    }

    /// Whether a root equal to `root` within `tol` is present.
    pub fn contains_approx(&self, root: Complex64, tol: f64) -> bool {
        self.roots.iter().any(|r| approx_eq(*r, root, tol))
    }

    /// Merge roots that agree within `tol`, keeping first occurrences.
    ///
    /// Floating-point roots cannot be hashed, so this is a linear scan.
    pub fn distinct(&self, tol: f64) -> RootSet {
        let mut unique = RootSet::default();
        for &root in &self.roots {
            if !unique.contains_approx(root, tol) {
                unique.roots.push(root);
            }
        }
        unique
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a Complex64;
    type IntoIter = std::slice::Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

/// Configuration for the root solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Zero threshold for leading coefficients and resolvent roots.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

/// Solver statistics.
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    /// Polynomials solved.
    pub solves: u64,
    /// Leading coefficients dropped as zero.
    pub degree_reductions: u64,
}

/// Closed-form root solver.
pub struct RootSolver {
    /// Configuration.
    config: SolverConfig,
    /// Statistics.
    stats: SolverStats,
}

impl RootSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            stats: SolverStats::default(),
        }
    }

    /// Create with default configuration.
    pub fn default_config() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Solve a polynomial, reducing the degree past near-zero leading terms.
    pub fn solve(&mut self, poly: &Polynomial) -> MathResult<RootSet> {
        let tol = self.config.tolerance;
        let c = poly.coefficients();

        let dropped = c
            .iter()
            .take(poly.degree())
            .take_while(|x| x.abs() < tol)
            .count();
        if dropped > 0 {
            debug!(
                declared = poly.degree(),
                effective = poly.degree() - dropped,
                "leading coefficients below tolerance"
            );
        }

        self.stats.solves += 1;
        self.stats.degree_reductions += dropped as u64;

        let roots = match c {
            [a, b] => closed_form::linear(*a, *b, tol),
            [a, b, c0] => closed_form::quadratic(*a, *b, *c0, tol),
            [a, b, c0, d] => closed_form::cubic(*a, *b, *c0, *d, tol),
            [a, b, c0, d, e] => closed_form::quartic(*a, *b, *c0, *d, *e, tol)?,
            _ => return Err(MathError::InvalidDegree(poly.degree())),
        };

        Ok(RootSet::new(roots))
    }

    /// Roots of `a·x + b`. Empty when `a` is zero.
    pub fn solve_linear(&self, a: f64, b: f64) -> Vec<Complex64> {
        closed_form::linear(a, b, self.config.tolerance)
    }

    /// Roots of `a·x² + b·x + c`.
    pub fn solve_quadratic(&self, a: f64, b: f64, c: f64) -> Vec<Complex64> {
        closed_form::quadratic(a, b, c, self.config.tolerance)
    }

    /// Roots of `a·x³ + b·x² + c·x + d`.
    pub fn solve_cubic(&self, a: f64, b: f64, c: f64, d: f64) -> Vec<Complex64> {
        closed_form::cubic(a, b, c, d, self.config.tolerance)
    }

    /// Roots of `a·x⁴ + b·x³ + c·x² + d·x + e`.
    pub fn solve_quartic(
        &self,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
    ) -> MathResult<Vec<Complex64>> {
        closed_form::quartic(a, b, c, d, e, self.config.tolerance)
    }

    /// Get statistics.
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = SolverStats::default();
    }
}

/// Solve a polynomial of the given degree with the default tolerance.
pub fn solve(degree: usize, coefficients: &[f64]) -> MathResult<RootSet> {
    let poly = Polynomial::with_degree(degree, coefficients)?;
    RootSolver::default_config().solve(&poly)
}

/// Roots of `a·x² + b·x + c` with the default tolerance.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<Complex64> {
    closed_form::quadratic(a, b, c, TOLERANCE)
}

/// Roots of `a·x³ + b·x² + c·x + d` with the default tolerance.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<Complex64> {
    closed_form::cubic(a, b, c, d, TOLERANCE)
}
