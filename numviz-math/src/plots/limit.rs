//! Classic limits approached numerically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Chart, SampleRange, Series};
use crate::error::{MathError, MathResult};

/// Past this many steps the samples drown in rounding error.
pub const MAX_LIMIT_STEPS: u32 = 8;

/// A limit with a known value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LimitExample {
    /// sin(x) / x as x → 0.
    SinOverX,
    /// (1 + 1/x)^x as x → ∞.
    CompoundInterest,
    /// (x² − 1) / (x − 1) as x → 1.
    RemovableHole,
}

/// One sample on the way to the limit point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitStep {
    /// Sample position.
    pub x: f64,
    /// f(x).
    pub value: f64,
}

/// Samples approaching the limit point from each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approach {
    /// Increasing positions toward the point.
    pub below: Vec<LimitStep>,
    /// Decreasing positions toward the point; empty for a limit at infinity.
    pub above: Vec<LimitStep>,
}

impl LimitExample {
    /// Every built-in example.
    pub const ALL: [LimitExample; 3] = [
        LimitExample::SinOverX,
        LimitExample::CompoundInterest,
        LimitExample::RemovableHole,
    ];

    /// f(x). Undefined exactly at the limit point.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            LimitExample::SinOverX => x.sin() / x,
            LimitExample::CompoundInterest => (1.0 + 1.0 / x).powf(x),
            LimitExample::RemovableHole => (x * x - 1.0) / (x - 1.0),
        }
    }

    /// The point approached; `None` for +∞.
    pub fn point(self) -> Option<f64> {
        match self {
            LimitExample::SinOverX => Some(0.0),
            LimitExample::CompoundInterest => None,
            LimitExample::RemovableHole => Some(1.0),
        }
    }

    /// The exact limit.
    pub fn limit_value(self) -> f64 {
        match self {
            LimitExample::SinOverX => 1.0,
            LimitExample::CompoundInterest => std::f64::consts::E,
            LimitExample::RemovableHole => 2.0,
        }
    }

    /// LaTeX statement of the limit.
    pub fn latex(self) -> &'static str {
        match self {
            LimitExample::SinOverX => "\\lim_{x \\to 0} \\frac{\\sin x}{x} = 1",
            LimitExample::CompoundInterest => {
                "\\lim_{x \\to \\infty} \\left(1 + \\frac{1}{x}\\right)^x = e"
            }
            LimitExample::RemovableHole => "\\lim_{x \\to 1} \\frac{x^2 - 1}{x - 1} = 2",
        }
    }

    /// Short name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            LimitExample::SinOverX => "sin-over-x",
            LimitExample::CompoundInterest => "compound-interest",
            LimitExample::RemovableHole => "removable-hole",
        }
    }

    /// Samples at distance `10^-k` from the point (or at `x = 10^k` for a
    /// limit at infinity), `k = 1..=steps`. `steps` is capped at
    /// [`MAX_LIMIT_STEPS`].
    pub fn approach(self, steps: u32) -> Approach {
        let steps = steps.min(MAX_LIMIT_STEPS);
        let step = |x: f64| LimitStep {
            x,
            value: self.eval(x),
        };

        match self.point() {
            Some(p) => {
                let offsets: Vec<f64> = (1..=steps).map(|k| 10f64.powi(-(k as i32))).collect();
                Approach {
                    below: offsets.iter().map(|h| step(p - h)).collect(),
                    above: offsets.iter().map(|h| step(p + h)).collect(),
                }
            }
            None => Approach {
                below: (1..=steps).map(|k| step(10f64.powi(k as i32))).collect(),
                above: Vec::new(),
            },
        }
    }

    /// Default plotting window around the point.
    pub fn window(self, samples: usize) -> SampleRange {
        match self.point() {
            Some(p) => SampleRange::new(p - 2.0, p + 2.0, samples),
            None => SampleRange::new(0.5, 50.0, samples),
        }
    }
}

impl fmt::Display for LimitExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LimitExample {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sin-over-x" | "sinc" => Ok(LimitExample::SinOverX),
            "compound-interest" | "e" => Ok(LimitExample::CompoundInterest),
            "removable-hole" | "hole" => Ok(LimitExample::RemovableHole),
            other => Err(MathError::UnknownFunction(other.to_string())),
        }
    }
}

/// Chart of the function around its limit point with the limit as a line.
///
/// The limit point itself is left out of the function series.
pub fn limit_chart(example: LimitExample, range: &SampleRange) -> MathResult<Chart> {
    range.validate()?;

    let point = example.point();
    let keep = |x: f64| point.is_none_or(|p| (x - p).abs() > 1e-12);
    let limit = example.limit_value();

    Ok(Chart {
        title: format!("Limit: {}", example),
        latex: Some(example.latex().to_string()),
        series: vec![
            Series::sample("f(x)", range, keep, |x| example.eval(x)),
            Series::sample("\\text{limit}", range, |_| true, |_| limit),
        ],
    })
}
