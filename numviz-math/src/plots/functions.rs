//! Built-in functions with hardcoded derivatives and antiderivatives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MathError;

/// A plottable elementary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    /// x²
    Square,
    /// x³
    Cube,
    /// sin x
    Sine,
    /// cos x
    Cosine,
    /// eˣ
    Exp,
    /// ln x
    Ln,
}

impl Function {
    /// Every built-in function.
    pub const ALL: [Function; 6] = [
        Function::Square,
        Function::Cube,
        Function::Sine,
        Function::Cosine,
        Function::Exp,
        Function::Ln,
    ];

    /// Whether `x` is in the domain.
    pub fn in_domain(self, x: f64) -> bool {
        match self {
            Function::Ln => x > 0.0,
            _ => x.is_finite(),
        }
    }

    /// f(x).
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Function::Square => x * x,
            Function::Cube => x * x * x,
            Function::Sine => x.sin(),
            Function::Cosine => x.cos(),
            Function::Exp => x.exp(),
            Function::Ln => x.ln(),
        }
    }

    /// f'(x).
    pub fn derivative(self, x: f64) -> f64 {
        self.nth_derivative(1, x)
    }

    /// The `k`-th derivative at `x`.
    pub fn nth_derivative(self, k: u32, x: f64) -> f64 {
        match self {
            Function::Square => match k {
                0 => x * x,
                1 => 2.0 * x,
                2 => 2.0,
                _ => 0.0,
            },
            Function::Cube => match k {
                0 => x * x * x,
                1 => 3.0 * x * x,
                2 => 6.0 * x,
                3 => 6.0,
                _ => 0.0,
            },
            Function::Sine => (x + k as f64 * std::f64::consts::FRAC_PI_2).sin(),
            Function::Cosine => (x + k as f64 * std::f64::consts::FRAC_PI_2).cos(),
            Function::Exp => x.exp(),
            Function::Ln => {
                if k == 0 {
                    return x.ln();
                }
                // (-1)^(k-1) (k-1)! / x^k
                let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
                let factorial: f64 = (1..k).map(f64::from).product();
                sign * factorial / x.powi(k as i32)
            }
        }
    }

    /// An antiderivative F with F' = f.
    pub fn antiderivative(self, x: f64) -> f64 {
        match self {
            Function::Square => x * x * x / 3.0,
            Function::Cube => x.powi(4) / 4.0,
            Function::Sine => -x.cos(),
            Function::Cosine => x.sin(),
            Function::Exp => x.exp(),
            Function::Ln => x * x.ln() - x,
        }
    }

    /// LaTeX for f(x).
    pub fn latex(self) -> &'static str {
        match self {
            Function::Square => "x^2",
            Function::Cube => "x^3",
            Function::Sine => "\\sin x",
            Function::Cosine => "\\cos x",
            Function::Exp => "e^x",
            Function::Ln => "\\ln x",
        }
    }

    /// LaTeX for f'(x).
    pub fn derivative_latex(self) -> &'static str {
        match self {
            Function::Square => "2x",
            Function::Cube => "3x^2",
            Function::Sine => "\\cos x",
            Function::Cosine => "-\\sin x",
            Function::Exp => "e^x",
            Function::Ln => "\\frac{1}{x}",
        }
    }

    /// LaTeX for the antiderivative.
    pub fn antiderivative_latex(self) -> &'static str {
        match self {
            Function::Square => "\\frac{x^3}{3}",
            Function::Cube => "\\frac{x^4}{4}",
            Function::Sine => "-\\cos x",
            Function::Cosine => "\\sin x",
            Function::Exp => "e^x",
            Function::Ln => "x \\ln x - x",
        }
    }

    /// Short name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Function::Square => "square",
            Function::Cube => "cube",
            Function::Sine => "sin",
            Function::Cosine => "cos",
            Function::Exp => "exp",
            Function::Ln => "ln",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" | "x^2" | "x2" => Ok(Function::Square),
            "cube" | "x^3" | "x3" => Ok(Function::Cube),
            "sin" | "sine" => Ok(Function::Sine),
            "cos" | "cosine" => Ok(Function::Cosine),
            "exp" | "e^x" => Ok(Function::Exp),
            "ln" | "log" => Ok(Function::Ln),
            other => Err(MathError::UnknownFunction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_derivative(f: impl Fn(f64) -> f64, x: f64) -> f64 {
        let h = 1e-5;
        (f(x + h) - f(x - h)) / (2.0 * h)
    }

    #[test]
    fn test_derivatives_match_finite_differences() {
        for func in Function::ALL {
            for x in [0.5, 1.3, 2.7] {
                let expected = numeric_derivative(|t| func.eval(t), x);
                assert!(
                    (func.derivative(x) - expected).abs() < 1e-6,
                    "{func} at {x}"
                );
            }
        }
    }

    #[test]
    fn test_antiderivatives_differentiate_back() {
        for func in Function::ALL {
            for x in [0.5, 1.3, 2.7] {
                let expected = numeric_derivative(|t| func.antiderivative(t), x);
                assert!((func.eval(x) - expected).abs() < 1e-6, "{func} at {x}");
            }
        }
    }

    #[test]
    fn test_higher_derivatives() {
        assert_eq!(Function::Cube.nth_derivative(3, 5.0), 6.0);
        assert_eq!(Function::Cube.nth_derivative(4, 5.0), 0.0);
        assert!((Function::Sine.nth_derivative(2, 1.0) + 1f64.sin()).abs() < 1e-12);
        // d³/dx³ ln x = 2 / x³
        assert!((Function::Ln.nth_derivative(3, 2.0) - 0.25).abs() < 1e-12);
        assert!((Function::Ln.nth_derivative(2, 2.0) + 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_domain_and_parsing() {
        assert!(!Function::Ln.in_domain(0.0));
        assert!(Function::Ln.in_domain(0.1));
        assert!(Function::Sine.in_domain(-100.0));
        assert_eq!("SIN".parse::<Function>(), Ok(Function::Sine));
        assert_eq!(
            "tan".parse::<Function>(),
            Err(MathError::UnknownFunction("tan".to_string()))
        );
    }
}
