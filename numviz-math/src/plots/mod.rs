//! Sampled Series for Calculus Charts.
//!
//! Builds the numeric series behind the derivative, limit, Taylor and
//! integral charts. Drawing them is left to a [`crate::render::ChartRenderer`].
//!
//! Every function here is a hardcoded closed form; nothing is differentiated
//! or integrated symbolically. Samples outside a function's domain are
//! skipped rather than emitted as NaN.

pub mod derivative;
pub mod functions;
pub mod integral;
pub mod limit;
pub mod taylor;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

pub use derivative::derivative_chart;
pub use functions::Function;
pub use integral::{IntegralSummary, RiemannRule, exact_integral, integral_chart, riemann_sum};
pub use limit::{Approach, LimitExample, LimitStep, limit_chart};
pub use taylor::{MAX_TAYLOR_ORDER, taylor_chart, taylor_coefficients, taylor_eval};

/// Largest number of samples in one series.
pub const MAX_SAMPLES: usize = 100_000;

/// Evenly spaced sample positions over a closed interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    /// First sample.
    pub start: f64,
    /// Last sample.
    pub end: f64,
    /// Number of samples, both ends included.
    pub samples: usize,
}

impl SampleRange {
    /// Create a range; call [`SampleRange::validate`] before use.
    pub fn new(start: f64, end: f64, samples: usize) -> Self {
        Self {
            start,
            end,
            samples,
        }
    }

    /// Check that the interval is finite and non-empty and the count sane.
    pub fn validate(&self) -> MathResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(MathError::InvalidRange("bounds must be finite".to_string()));
        }
        if self.start >= self.end {
            return Err(MathError::InvalidRange(format!(
                "start {} must be below end {}",
                self.start, self.end
            )));
        }
        if !(2..=MAX_SAMPLES).contains(&self.samples) {
            return Err(MathError::InvalidRange(format!(
                "samples must be between 2 and {}, got {}",
                MAX_SAMPLES, self.samples
            )));
        }
        Ok(())
    }

    /// Sample positions, `start` and `end` included.
    pub fn points(&self) -> Vec<f64> {
        let step = (self.end - self.start) / (self.samples - 1) as f64;
        (0..self.samples)
            .map(|i| {
                if i + 1 == self.samples {
                    self.end
                } else {
                    self.start + step * i as f64
                }
            })
            .collect()
    }
}

/// One labelled polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend label (LaTeX).
    pub label: String,
    /// `(x, y)` points in drawing order.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Sample `f` over `range`, skipping points where `keep` is false or the
    /// value is not finite.
    pub fn sample(
        label: impl Into<String>,
        range: &SampleRange,
        keep: impl Fn(f64) -> bool,
        f: impl Fn(f64) -> f64,
    ) -> Self {
        let points = range
            .points()
            .into_iter()
            .filter(|&x| keep(x))
            .map(|x| (x, f(x)))
            .filter(|(_, y)| y.is_finite())
            .collect();
        Self {
            label: label.into(),
            points,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True with no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Series drawn together, with a title and an optional LaTeX caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Plain-text title.
    pub title: String,
    /// Caption rendered by the markup renderer.
    pub latex: Option<String>,
    /// Series in legend order.
    pub series: Vec<Series>,
}

impl Chart {
    /// Series by label.
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_include_both_ends() {
        let range = SampleRange::new(-1.0, 1.0, 5);
        assert_eq!(range.points(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let range = SampleRange::new(0.0, 0.3, 4);
        assert_eq!(range.points().last(), Some(&0.3));
    }

    #[test]
    fn test_validate() {
        assert!(SampleRange::new(0.0, 1.0, 2).validate().is_ok());
        for bad in [
            SampleRange::new(1.0, 1.0, 10),
            SampleRange::new(2.0, 1.0, 10),
            SampleRange::new(0.0, f64::INFINITY, 10),
            SampleRange::new(0.0, 1.0, 1),
            SampleRange::new(0.0, 1.0, MAX_SAMPLES + 1),
        ] {
            assert!(matches!(bad.validate(), Err(MathError::InvalidRange(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_sample_skips_domain_gaps() {
        let range = SampleRange::new(-1.0, 1.0, 5);
        let series = Series::sample("ln", &range, |x| Function::Ln.in_domain(x), f64::ln);
        assert_eq!(series.len(), 2);
        assert!(series.points.iter().all(|(x, _)| *x > 0.0));

        let series = Series::sample("1/x", &range, |_| true, |x| 1.0 / x);
        assert_eq!(series.len(), 4);
    }
}
