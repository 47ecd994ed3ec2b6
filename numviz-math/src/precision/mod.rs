//! Arbitrary-Precision Constants.
//!
//! Square roots, π, e and the golden ratio to a requested number of decimal
//! places.
//!
//! ## Algorithms
//!
//! - **Square root**: Newton's method seeded from the `f64` root
//! - **π**: Gauss–Legendre (Salamin–Brent) iteration, `⌈log₂ digits⌉` rounds
//! - **e**: the series `Σ 1/i!`
//! - **φ**: `(1 + √5) / 2`
//!
//! Every computation carries `digits + guard_digits` fractional digits and
//! truncates the result to exactly `digits`.

pub mod decimal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MathError, MathResult};
pub use decimal::Decimal;

/// Name of the plain-text file a result is exported to.
pub const EXPORT_FILE_NAME: &str = "high_precision_result.txt";

/// Which constant to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Square root of an integer operand.
    Sqrt,
    /// π.
    Pi,
    /// Euler's number.
    E,
    /// The golden ratio.
    Phi,
}

impl Task {
    /// All tasks, in display order.
    pub const ALL: [Task; 4] = [Task::Sqrt, Task::Pi, Task::E, Task::Phi];

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Sqrt => "sqrt",
            Task::Pi => "pi",
            Task::E => "e",
            Task::Phi => "phi",
        }
    }

    /// Whether the task reads an operand.
    pub fn needs_operand(&self) -> bool {
        matches!(self, Task::Sqrt)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Task {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqrt" | "√" => Ok(Task::Sqrt),
            "pi" | "π" => Ok(Task::Pi),
            "e" => Ok(Task::E),
            "phi" | "φ" | "golden" => Ok(Task::Phi),
            other => Err(MathError::UnknownTask(other.to_string())),
        }
    }
}

/// Bounds and working-precision settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecisionConfig {
    /// Smallest digit count accepted for any task.
    pub min_digits: usize,
    /// Largest digit count for square roots.
    pub max_sqrt_digits: usize,
    /// Largest digit count for π, e and φ.
    pub max_constant_digits: usize,
    /// Extra fractional digits carried during computation.
    pub guard_digits: usize,
    /// Smallest square-root operand.
    pub min_operand: u32,
    /// Largest square-root operand.
    pub max_operand: u32,
    /// Newton iteration cap for square roots.
    pub max_newton_iterations: usize,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            min_digits: 10,
            max_sqrt_digits: 15_000,
            max_constant_digits: 2_000,
            guard_digits: 5,
            min_operand: 1,
            max_operand: 10_000,
            max_newton_iterations: 200,
        }
    }
}

impl PrecisionConfig {
    /// Largest digit count accepted for a task.
    pub fn max_digits(&self, task: Task) -> usize {
        match task {
            Task::Sqrt => self.max_sqrt_digits,
            Task::Pi | Task::E | Task::Phi => self.max_constant_digits,
        }
    }
}

/// A validated-on-dispatch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionRequest {
    /// Constant to compute.
    pub task: Task,
    /// Square-root operand; ignored by the other tasks.
    pub operand: Option<u32>,
    /// Fractional digits wanted.
    pub digits: usize,
}

impl PrecisionRequest {
    /// Create a request.
    pub fn new(task: Task, operand: Option<u32>, digits: usize) -> Self {
        Self {
            task,
            operand,
            digits,
        }
    }

    /// Check the digit count, then the operand.
    pub fn validate(&self, config: &PrecisionConfig) -> MathResult<()> {
        let max = config.max_digits(self.task);
        if self.digits < config.min_digits || self.digits > max {
            return Err(MathError::OutOfRange {
                digits: self.digits,
                min: config.min_digits,
                max,
            });
        }

        if self.task.needs_operand() {
            let in_range = self
                .operand
                .is_some_and(|n| (config.min_operand..=config.max_operand).contains(&n));
            if !in_range {
                return Err(MathError::InvalidOperand {
                    operand: self
                        .operand
                        .map_or_else(|| "none".to_string(), |n| n.to_string()),
                    min: config.min_operand,
                    max: config.max_operand,
                });
            }
        }

        Ok(())
    }
}

/// A computed constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionResult {
    /// Constant computed.
    pub task: Task,
    /// Operand used, for square roots.
    pub operand: Option<u32>,
    /// Fractional digits in `value`.
    pub digits: usize,
    /// Decimal expansion truncated to `digits` places.
    pub value: String,
    /// Iterations or series terms used.
    pub iterations: usize,
}

/// Engine statistics.
#[derive(Debug, Clone, Default)]
pub struct PrecisionStats {
    /// Requests computed.
    pub computations: u64,
    /// Requests rejected by validation.
    pub rejected: u64,
    /// Total iterations across all computations.
    pub total_iterations: u64,
}

/// Arbitrary-precision engine.
pub struct PrecisionEngine {
    /// Configuration.
    config: PrecisionConfig,
    /// Statistics.
    stats: PrecisionStats,
}

impl PrecisionEngine {
    /// Create an engine.
    pub fn new(config: PrecisionConfig) -> Self {
        Self {
            config,
            stats: PrecisionStats::default(),
        }
    }

    /// Create with default configuration.
    pub fn default_config() -> Self {
        Self::new(PrecisionConfig::default())
    }

    /// Configuration in use.
    pub fn config(&self) -> &PrecisionConfig {
        &self.config
    }

    /// Validate and run a request.
    pub fn compute(&mut self, request: &PrecisionRequest) -> MathResult<PrecisionResult> {
        if let Err(e) = request.validate(&self.config) {
            self.stats.rejected += 1;
            return Err(e);
        }

        let digits = request.digits;
        let (value, iterations) = match request.task {
            Task::Sqrt => {
                // validate() guarantees the operand
                let operand = request.operand.unwrap_or(self.config.min_operand);
                self.sqrt(operand, digits)?
            }
            Task::Pi => self.pi(digits)?,
            Task::E => self.e(digits),
            Task::Phi => self.phi(digits)?,
        };
        debug!(task = %request.task, digits, iterations, "computed");

        self.stats.computations += 1;
        self.stats.total_iterations += iterations as u64;

        Ok(PrecisionResult {
            task: request.task,
            operand: request.operand.filter(|_| request.task.needs_operand()),
            digits,
            value: value.to_string_truncated(digits as u32),
            iterations,
        })
    }

    fn working_scale(&self, digits: usize) -> u32 {
        (digits + self.config.guard_digits) as u32
    }

    /// `√operand` carried at `digits + guard` places.
    fn sqrt(&self, operand: u32, digits: usize) -> MathResult<(Decimal, usize)> {
        let scale = self.working_scale(digits);
        let threshold = Decimal::epsilon((digits + 2) as u32, scale);
        let (root, iterations) = Decimal::from_integer(operand, scale)
            .sqrt(&threshold, self.config.max_newton_iterations)
            .ok_or_else(|| MathError::DomainError("square root of a negative".to_string()))?;
        Ok((root, iterations))
    }

    /// π by the Gauss–Legendre iteration.
    fn pi(&self, digits: usize) -> MathResult<(Decimal, usize)> {
        let scale = self.working_scale(digits);
        let threshold = Decimal::epsilon((digits + 2) as u32, scale);
        let cap = self.config.max_newton_iterations;
        let sqrt = |x: &Decimal| {
            x.sqrt(&threshold, cap)
                .map(|(root, _)| root)
                .ok_or_else(|| MathError::DomainError("square root of a negative".to_string()))
        };

        let one = Decimal::from_integer(1, scale);
        let root_two = sqrt(&Decimal::from_integer(2, scale))?;
        let mut a = one.clone();
        let mut b = one
            .checked_div(&root_two)
            .ok_or_else(|| MathError::DomainError("division by zero".to_string()))?;
        let mut t = Decimal::from_ratio(1, 4, scale);
        let mut p: u64 = 1;

        let rounds = ceil_log2(digits);
        for _ in 0..rounds {
            let a_next = (&a + &b).div_int(2);
            b = sqrt(&(&a * &b))?;
            let diff = &a - &a_next;
            t = &t - &(&diff * &diff).mul_int(p);
            p *= 2;
            a = a_next;
        }

        let sum = &a + &b;
        let value = (&sum * &sum)
            .checked_div(&t.mul_int(4))
            .ok_or_else(|| MathError::DomainError("division by zero".to_string()))?;
        Ok((value, rounds))
    }

    /// e as `Σ 1/i!`, stopping below `10^-(digits+3)` or after `2·digits` terms.
    fn e(&self, digits: usize) -> (Decimal, usize) {
        let scale = self.working_scale(digits);
        let threshold = Decimal::epsilon((digits + 3) as u32, scale);
        let max_terms = 2 * digits;

        let mut term = Decimal::from_integer(1, scale);
        let mut sum = term.clone();
        let mut terms = 1;
        while terms < max_terms {
            term = term.div_int(terms as u64);
            if term < threshold {
                break;
            }
            sum = &sum + &term;
            terms += 1;
        }
        if terms >= max_terms {
            warn!(max_terms, "series stopped at term cap");
        }

        (sum, terms)
    }

    /// φ = (1 + √5) / 2, with √5 computed five digits deeper.
    fn phi(&self, digits: usize) -> MathResult<(Decimal, usize)> {
        let (root_five, iterations) = self.sqrt(5, digits + 5)?;
        let one = Decimal::from_integer(1, root_five.scale());
        Ok(((&one + &root_five).div_int(2), iterations))
    }

    /// Get statistics.
    pub fn stats(&self) -> &PrecisionStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = PrecisionStats::default();
    }
}

/// `⌈log₂ n⌉` for `n >= 1`.
fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Compute a constant with the default configuration.
pub fn compute(task: Task, operand: Option<u32>, digits: usize) -> MathResult<String> {
    PrecisionEngine::default_config()
        .compute(&PrecisionRequest::new(task, operand, digits))
        .map(|result| result.value)
}
