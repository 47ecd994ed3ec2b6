//! Riemann sums against the exact definite integral.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Chart, Function, SampleRange, Series};
use crate::error::{MathError, MathResult};
use crate::format::format_component;

/// Largest number of sub-intervals.
pub const MAX_INTERVALS: usize = 10_000;

/// Where each sub-interval is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiemannRule {
    /// Left endpoint.
    Left,
    /// Right endpoint.
    Right,
    /// Midpoint.
    Midpoint,
    /// Average of both endpoints.
    Trapezoid,
}

impl RiemannRule {
    /// Short name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            RiemannRule::Left => "left",
            RiemannRule::Right => "right",
            RiemannRule::Midpoint => "midpoint",
            RiemannRule::Trapezoid => "trapezoid",
        }
    }

    /// Height of the piece over `[x0, x1]`, or the two end heights for the
    /// trapezoid rule.
    fn heights(self, func: Function, x0: f64, x1: f64) -> (f64, f64) {
        match self {
            RiemannRule::Left => {
                let y = func.eval(x0);
                (y, y)
            }
            RiemannRule::Right => {
                let y = func.eval(x1);
                (y, y)
            }
            RiemannRule::Midpoint => {
                let y = func.eval((x0 + x1) / 2.0);
                (y, y)
            }
            RiemannRule::Trapezoid => (func.eval(x0), func.eval(x1)),
        }
    }
}

impl fmt::Display for RiemannRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiemannRule {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(RiemannRule::Left),
            "right" => Ok(RiemannRule::Right),
            "midpoint" | "mid" => Ok(RiemannRule::Midpoint),
            "trapezoid" | "trap" => Ok(RiemannRule::Trapezoid),
            other => Err(MathError::UnknownFunction(other.to_string())),
        }
    }
}

/// Exact value against the approximation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegralSummary {
    /// Integrand.
    pub function: Function,
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Sampling rule.
    pub rule: RiemannRule,
    /// Number of sub-intervals.
    pub intervals: usize,
    /// `F(upper) − F(lower)`.
    pub exact: f64,
    /// The Riemann sum.
    pub approximation: f64,
    /// `approximation − exact`.
    pub error: f64,
}

fn check_bounds(func: Function, a: f64, b: f64, n: usize) -> MathResult<()> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(MathError::InvalidRange(format!(
            "need finite bounds with lower < upper, got [{}, {}]",
            a, b
        )));
    }
    if !(1..=MAX_INTERVALS).contains(&n) {
        return Err(MathError::InvalidRange(format!(
            "intervals must be between 1 and {}, got {}",
            MAX_INTERVALS, n
        )));
    }
    // Every built-in domain is an interval, so the end points decide.
    if !func.in_domain(a) || !func.in_domain(b) {
        return Err(MathError::DomainError(format!(
            "{} is undefined on [{}, {}]",
            func, a, b
        )));
    }
    Ok(())
}

/// `F(b) − F(a)` from the hardcoded antiderivative.
pub fn exact_integral(func: Function, a: f64, b: f64) -> MathResult<f64> {
    check_bounds(func, a, b, 1)?;
    Ok(func.antiderivative(b) - func.antiderivative(a))
}

/// Riemann sum of `func` over `[a, b]` with `n` equal pieces.
pub fn riemann_sum(func: Function, a: f64, b: f64, n: usize, rule: RiemannRule) -> MathResult<f64> {
    check_bounds(func, a, b, n)?;
    let width = (b - a) / n as f64;
    Ok((0..n)
        .map(|i| {
            let x0 = a + width * i as f64;
            let (h0, h1) = rule.heights(func, x0, x0 + width);
            width * (h0 + h1) / 2.0
        })
        .sum())
}

/// Chart of the integrand with the outline of the Riemann pieces.
pub fn integral_chart(
    func: Function,
    a: f64,
    b: f64,
    n: usize,
    rule: RiemannRule,
    samples: usize,
) -> MathResult<(Chart, IntegralSummary)> {
    let range = SampleRange::new(a, b, samples);
    range.validate()?;

    let exact = exact_integral(func, a, b)?;
    let approximation = riemann_sum(func, a, b, n, rule)?;

    // Closed outline of each piece, drawn as one polyline.
    let width = (b - a) / n as f64;
    let mut outline = Vec::with_capacity(4 * n);
    for i in 0..n {
        let x0 = a + width * i as f64;
        let x1 = if i + 1 == n { b } else { x0 + width };
        let (h0, h1) = rule.heights(func, x0, x1);
        outline.extend([(x0, 0.0), (x0, h0), (x1, h1), (x1, 0.0)]);
    }

    let chart = Chart {
        title: format!("Integral of {} ({} rule, n = {})", func, rule, n),
        latex: Some(format!(
            "\\int_{{{}}}^{{{}}} {} \\, dx = \\left[{}\\right]_{{{}}}^{{{}}}",
            format_component(a),
            format_component(b),
            func.latex(),
            func.antiderivative_latex(),
            format_component(a),
            format_component(b)
        )),
        series: vec![
            Series::sample(func.latex(), &range, |x| func.in_domain(x), |x| func.eval(x)),
            Series {
                label: format!("\\text{{{}}}", rule),
                points: outline,
            },
        ],
    };

    let summary = IntegralSummary {
        function: func,
        lower: a,
        upper: b,
        rule,
        intervals: n,
        exact,
        approximation,
        error: approximation - exact,
    };
    Ok((chart, summary))
}
