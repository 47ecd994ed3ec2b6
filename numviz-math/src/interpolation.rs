//! Sequence Interpolation.
//!
//! Fits the Newton-form polynomial through a short sequence sampled at the
//! 1-based positions `1..=k` and extrapolates further terms.
//!
//! Formula: P(n) = f\[x₁\] + f\[x₁,x₂\](n-x₁) + f\[x₁,x₂,x₃\](n-x₁)(n-x₂) + ...
//!
//! Predictions carry no error bound. They are exact only when the sequence
//! really is a polynomial of degree below `k`.
//!
//! ## References
//!
//! - "Numerical Analysis" (Burden & Faires, 2010)

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MathError, MathResult};
use crate::format::format_component;
use crate::roots::TOLERANCE;

/// Formula shown when no values are given.
pub const EMPTY_FORMULA: &str = "a_n = ?";

/// Newton-form interpolating polynomial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewtonPolynomial {
    /// Sample positions x₁..x_k.
    nodes: Vec<f64>,
    /// Divided-difference coefficients a₀..a_{k-1}.
    coefficients: Vec<f64>,
}

impl NewtonPolynomial {
    /// Divided-difference coefficients, lowest order first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Sample positions.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Degree after dropping vanishing high-order coefficients.
    ///
    /// `None` when there are no coefficients at all.
    pub fn degree(&self) -> Option<usize> {
        if self.coefficients.is_empty() {
            return None;
        }
        Some(
            self.coefficients
                .iter()
                .rposition(|c| c.abs() >= TOLERANCE)
                .unwrap_or(0),
        )
    }

    /// Value at position `n`, via nested products. NaN when empty.
    pub fn evaluate(&self, n: f64) -> f64 {
        let Some((&last, rest)) = self.coefficients.split_last() else {
            return f64::NAN;
        };
        rest.iter()
            .zip(&self.nodes)
            .rev()
            .fold(last, |acc, (&c, &x)| acc * (n - x) + c)
    }

    /// The `count` terms following the samples, rounded to integers.
    ///
    /// Kept as `f64` so terms beyond the `i64` range stay exact to the
    /// precision of the fit.
    pub fn predict(&self, count: usize) -> Vec<f64> {
        if self.coefficients.is_empty() {
            return Vec::new();
        }
        let start = self.nodes.len() + 1;
        (start..start + count)
            // + 0.0 folds -0 into 0
            .map(|n| self.evaluate(n as f64).round() + 0.0)
            .collect()
    }

    /// LaTeX formula `a_n = …` in Newton form, zero terms omitted.
    pub fn formula(&self) -> String {
        if self.coefficients.is_empty() {
            return EMPTY_FORMULA.to_string();
        }

        let mut body = String::new();
        for (i, &c) in self.coefficients.iter().enumerate() {
            if c.abs() < TOLERANCE {
                continue;
            }

            let product: String = self.nodes[..i]
                .iter()
                .map(|&x| format!("(n - {})", format_component(x)))
                .collect();
            let magnitude = c.abs();
            let coefficient = if !product.is_empty() && (magnitude - 1.0).abs() < TOLERANCE {
                String::new()
            } else {
                format_component(magnitude)
            };

            if body.is_empty() {
                if c < 0.0 {
                    body.push('-');
                }
            } else {
                body.push_str(if c < 0.0 { " - " } else { " + " });
            }
            body.push_str(&coefficient);
            body.push_str(&product);
        }

        if body.is_empty() {
            body.push('0');
        }
        format!("a_n = {}", body)
    }
}

/// Interpolate `values` sampled at positions `1..=values.len()`.
pub fn interpolate(values: &[f64]) -> NewtonPolynomial {
    let n = values.len();
    let nodes: Vec<f64> = (1..=n).map(|i| i as f64).collect();

    // Column j of the divided-difference table overwrites in place;
    // dd[i] ends up holding f[x₀..x_i].
    let mut dd = values.to_vec();
    for j in 1..n {
        for i in (j..n).rev() {
            dd[i] = (dd[i] - dd[i - 1]) / (nodes[i] - nodes[i - j]);
        }
    }

    NewtonPolynomial {
        nodes,
        coefficients: dd,
    }
}

/// Configuration for sequence prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Largest number of samples accepted.
    pub max_samples: usize,
    /// Number of terms to predict.
    pub predictions: usize,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            max_samples: 6,
            predictions: 5,
        }
    }
}

/// Statistics for sequence prediction.
#[derive(Debug, Clone, Default)]
pub struct InterpolationStats {
    /// Sequences fitted.
    pub interpolations: u64,
    /// Average degree of the fitted polynomials.
    pub avg_degree: f64,
}

/// Formula and extrapolated terms for one sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceReport {
    /// The samples as given.
    pub values: Vec<f64>,
    /// LaTeX Newton-form formula.
    pub formula: String,
    /// Next terms, rounded to the nearest integer.
    pub predictions: Vec<f64>,
}

/// Predicts the next terms of a short sequence.
pub struct SequencePredictor {
    /// Configuration.
    config: InterpolationConfig,
    /// Statistics.
    stats: InterpolationStats,
}

impl SequencePredictor {
    /// Create a predictor.
    pub fn new(config: InterpolationConfig) -> Self {
        Self {
            config,
            stats: InterpolationStats::default(),
        }
    }

    /// Create with default configuration.
    pub fn default_config() -> Self {
        Self::new(InterpolationConfig::default())
    }

    /// Fit `values` and predict the configured number of terms.
    pub fn predict(&mut self, values: &[f64]) -> MathResult<SequenceReport> {
        if values.len() > self.config.max_samples {
            return Err(MathError::TooManySamples {
                got: values.len(),
                max: self.config.max_samples,
            });
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(MathError::NonNumericInput {
                field: format!("value {}", i + 1),
                value: values[i].to_string(),
            });
        }

        let poly = interpolate(values);
        if let Some(degree) = poly.degree() {
            self.stats.interpolations += 1;
            self.update_degree_stats(degree);
            debug!(samples = values.len(), degree, "sequence fitted");
        }

        let predictions = poly.predict(self.config.predictions);
        if let Some(p) = predictions.iter().find(|p| !p.is_finite()) {
            return Err(MathError::DomainError(format!(
                "predicted term {} is out of range",
                p
            )));
        }

        Ok(SequenceReport {
            values: values.to_vec(),
            formula: poly.formula(),
            predictions,
        })
    }

    /// Update average degree statistics.
    fn update_degree_stats(&mut self, degree: usize) {
        let count = self.stats.interpolations;
        let old_avg = self.stats.avg_degree;
        self.stats.avg_degree = (old_avg * (count - 1) as f64 + degree as f64) / count as f64;
    }

    /// Get statistics.
    pub fn stats(&self) -> &InterpolationStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = InterpolationStats::default();
    }
}
