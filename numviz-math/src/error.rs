//! Error types shared by every numviz computation.

use thiserror::Error;

/// Errors that can be reported to the user.
///
/// A near-zero leading coefficient is not an error: the solver reduces the
/// degree and dispatches to the lower-degree formula instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A field could not be parsed as a finite number.
    #[error("{field}: '{value}' is not a number")]
    NonNumericInput {
        /// Name of the offending field (e.g. `a`, `coefficient 2`).
        field: String,
        /// The raw text that failed to parse.
        value: String,
    },

    /// Requested digit count is outside the bounds allowed for the task.
    #[error("digits must be between {min} and {max}, got {digits}")]
    OutOfRange {
        /// Requested digits.
        digits: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// Square-root operand is missing or outside the accepted interval.
    #[error("operand must be an integer between {min} and {max}, got {operand}")]
    InvalidOperand {
        /// Operand as given (`none` when omitted).
        operand: String,
        /// Smallest accepted operand.
        min: u32,
        /// Largest accepted operand.
        max: u32,
    },

    /// Unrecognised precision task name.
    #[error("unknown task '{0}', expected sqrt, pi, e or phi")]
    UnknownTask(String),

    /// Unrecognised function or limit name.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// The quartic resolvent cubic produced no real root.
    #[error("quartic resolvent has no real root")]
    NoRealResolventRoot,

    /// Polynomial degree outside 1..=4.
    #[error("degree must be between 1 and 4, got {0}")]
    InvalidDegree(usize),

    /// Coefficient list does not match the degree.
    #[error("degree {degree} needs {expected} coefficients, got {got}")]
    CoefficientCount {
        /// Declared degree.
        degree: usize,
        /// `degree + 1`.
        expected: usize,
        /// Number of coefficients supplied.
        got: usize,
    },

    /// Too many samples for the sequence predictor.
    #[error("at most {max} values can be given, got {got}")]
    TooManySamples {
        /// Number of samples supplied.
        got: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Invalid sampling range for a chart.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Unknown calculator key.
    #[error("unknown calculator key '{0}'")]
    InvalidKey(char),

    /// Argument outside a function's domain.
    #[error("domain error: {0}")]
    DomainError(String),
}

/// Result type for numviz computations.
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_short() {
        let err = MathError::OutOfRange {
            digits: 2001,
            min: 10,
            max: 2000,
        };
        assert_eq!(err.to_string(), "digits must be between 10 and 2000, got 2001");

        let err = MathError::NonNumericInput {
            field: "b".to_string(),
            value: "x".to_string(),
        };
        assert_eq!(err.to_string(), "b: 'x' is not a number");
    }
}
