//! Four-function calculator as an explicit state machine.
//!
//! [`CalculatorState`] is an immutable value: every key press produces the
//! next state. Operators chain left to right as on a pocket calculator, so
//! `2 + 3 * 4 =` shows `20`.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Text shown after a division by zero or an overflow.
pub const ERROR_DISPLAY: &str = "Error";

/// Maximum digits accepted in one entry.
const MAX_ENTRY_DIGITS: usize = 16;

/// Binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// Apply to two operands. `None` for division by zero or a non-finite result.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        let value = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide if rhs == 0.0 => return None,
            Operator::Divide => lhs / rhs,
        };
        value.is_finite().then_some(value)
    }

    /// Symbol as typed.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// One calculator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A digit 0-9.
    Digit(u8),
    /// Decimal point.
    Point,
    /// An operator.
    Operator(Operator),
    /// `=`
    Equals,
    /// Clear everything.
    Clear,
    /// Delete the last typed character.
    Backspace,
    /// Toggle the sign of the display.
    Negate,
}

impl Key {
    /// Map a typed character: `0-9 . + - * / = C < ~` (also `x × ÷`).
    pub fn from_char(c: char) -> MathResult<Key> {
        let key = match c {
            '0'..='9' => Key::Digit(c as u8 - b'0'),
            '.' | ',' => Key::Point,
            '+' => Key::Operator(Operator::Add),
            '-' => Key::Operator(Operator::Subtract),
            '*' | 'x' | '×' => Key::Operator(Operator::Multiply),
            '/' | '÷' => Key::Operator(Operator::Divide),
            '=' => Key::Equals,
            'C' | 'c' => Key::Clear,
            '<' => Key::Backspace,
            '~' => Key::Negate,
            other => return Err(MathError::InvalidKey(other)),
        };
        Ok(key)
    }

    /// Parse a whole key sequence, ignoring whitespace.
    pub fn parse_sequence(input: &str) -> MathResult<Vec<Key>> {
        input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Key::from_char)
            .collect()
    }
}

/// Calculator state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text on the display.
    pub display: String,
    /// Left operand of the pending operation.
    pub accumulator: Option<f64>,
    /// Operator waiting for its right operand.
    pub pending: Option<Operator>,
    /// The next digit starts a new entry.
    pub awaiting_operand: bool,
    /// Showing [`ERROR_DISPLAY`].
    pub error: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            awaiting_operand: false,
            error: false,
        }
    }
}

impl CalculatorState {
    /// Fresh calculator showing `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Numeric value of the display.
    pub fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Next state after pressing `key`.
    pub fn apply(&self, key: Key) -> CalculatorState {
        if self.error {
            return match key {
                Key::Clear => Self::default(),
                Key::Digit(_) | Key::Point => Self::default().apply(key),
                _ => self.clone(),
            };
        }

        let mut next = self.clone();
        match key {
            Key::Digit(d) => {
                let d = char::from(b'0' + d.min(9));
                if next.awaiting_operand || next.display == "0" {
                    next.display = d.to_string();
                    next.awaiting_operand = false;
                } else if next.display == "-0" {
                    next.display = format!("-{}", d);
                } else if digit_count(&next.display) < MAX_ENTRY_DIGITS {
                    next.display.push(d);
                }
            }
            Key::Point => {
                if next.awaiting_operand {
                    next.display = "0.".to_string();
                    next.awaiting_operand = false;
                } else if !next.display.contains('.') {
                    next.display.push('.');
                }
            }
            Key::Backspace => {
                if !next.awaiting_operand {
                    next.display.pop();
                    if next.display.is_empty() || next.display == "-" {
                        next.display = "0".to_string();
                    }
                }
            }
            Key::Negate => {
                if let Some(stripped) = next.display.strip_prefix('-') {
                    next.display = stripped.to_string();
                } else if next.value() != 0.0 || next.display.contains('.') {
                    next.display.insert(0, '-');
                }
            }
            Key::Operator(op) => {
                if let (Some(pending), Some(lhs), false) =
                    (next.pending, next.accumulator, next.awaiting_operand)
                {
                    match pending.apply(lhs, next.value()) {
                        Some(result) => {
                            next.display = format_value(result);
                            next.accumulator = Some(result);
                        }
                        None => return Self::error_state(),
                    }
                } else if next.pending.is_none() || !next.awaiting_operand {
                    next.accumulator = Some(next.value());
                }
                next.pending = Some(op);
                next.awaiting_operand = true;
            }
            Key::Equals => {
                if let (Some(pending), Some(lhs)) = (next.pending, next.accumulator) {
                    // "5 + =" reuses the display as the right operand
                    match pending.apply(lhs, next.value()) {
                        Some(result) => next.display = format_value(result),
                        None => return Self::error_state(),
                    }
                }
                next.accumulator = None;
                next.pending = None;
                next.awaiting_operand = true;
            }
            Key::Clear => return Self::default(),
        }
        next
    }

    /// Apply a sequence of keys in order.
    pub fn apply_all<I: IntoIterator<Item = Key>>(&self, keys: I) -> CalculatorState {
        keys.into_iter().fold(self.clone(), |state, key| state.apply(key))
    }

    fn error_state() -> CalculatorState {
        CalculatorState {
            display: ERROR_DISPLAY.to_string(),
            error: true,
            ..Self::default()
        }
    }
}

fn digit_count(display: &str) -> usize {
    display.chars().filter(char::is_ascii_digit).count()
}

/// Display text for a result: at most ten decimals, trailing zeros trimmed.
fn format_value(value: f64) -> String {
    let text = format!("{:.10}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
