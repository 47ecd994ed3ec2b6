//! Fixed-point decimal numbers.
//!
//! A [`Decimal`] is `mantissa / 10^scale` with a big-integer mantissa. All
//! operands of one computation share the same scale; results are truncated
//! toward zero to that scale.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};
use tracing::{trace, warn};

/// `10^exp` as a big integer.
pub fn pow10(exp: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u32), exp as usize)
}

/// Digits carried by the `f64` seed conversion.
const SEED_DIGITS: u32 = 15;

/// Fixed-point decimal with `scale` fractional digits.
#[derive(Debug, Clone)]
pub struct Decimal {
    mantissa: BigInt,
    scale: u32,
}

impl Decimal {
    /// Zero at the given scale.
    pub fn zero(scale: u32) -> Self {
        Self {
            mantissa: BigInt::zero(),
            scale,
        }
    }

    /// An integer at the given scale.
    pub fn from_integer(value: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            mantissa: value.into() * pow10(scale),
            scale,
        }
    }

    /// `10^-exponent` at the given scale; clamps to one unit in the last place.
    pub fn epsilon(exponent: u32, scale: u32) -> Self {
        Self {
            mantissa: pow10(scale - exponent.min(scale)),
            scale,
        }
    }

    /// `numer / denom` at the given scale, truncated.
    pub fn from_ratio(numer: i64, denom: i64, scale: u32) -> Self {
        Self {
            mantissa: BigInt::from(numer) * pow10(scale) / BigInt::from(denom),
            scale,
        }
    }

    /// Convert a finite `f64`, keeping about fifteen significant decimals.
    ///
    /// Returns `None` for NaN or infinities.
    pub fn from_f64(value: f64, scale: u32) -> Option<Self> {
        let seed = BigInt::from_f64((value * 10f64.powi(SEED_DIGITS as i32)).round())?;
        let mantissa = if scale >= SEED_DIGITS {
            seed * pow10(scale - SEED_DIGITS)
        } else {
            seed / pow10(SEED_DIGITS - scale)
        };
        Some(Self { mantissa, scale })
    }

    /// Nearest `f64`, computed from the leading digits only.
    pub fn to_f64(&self) -> f64 {
        const KEEP: u32 = 17;
        let (mantissa, scale) = if self.scale > KEEP {
            (&self.mantissa / pow10(self.scale - KEEP), KEEP)
        } else {
            (self.mantissa.clone(), self.scale)
        };
        mantissa.to_f64().unwrap_or(f64::NAN) / 10f64.powi(scale as i32)
    }

    /// Fractional digits carried.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// True for exactly zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// True below zero.
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            mantissa: self.mantissa.abs(),
            scale: self.scale,
        }
    }

    /// Truncated quotient `self / rhs`. Returns `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Decimal) -> Option<Self> {
        debug_assert_eq!(self.scale, rhs.scale);
        if rhs.is_zero() {
            return None;
        }
        Some(Self {
            mantissa: &self.mantissa * pow10(self.scale) / &rhs.mantissa,
            scale: self.scale,
        })
    }

    /// Divide by a positive integer.
    pub fn div_int(&self, rhs: u64) -> Self {
        Self {
            mantissa: &self.mantissa / BigInt::from(rhs),
            scale: self.scale,
        }
    }

    /// Multiply by an integer.
    pub fn mul_int(&self, rhs: u64) -> Self {
        Self {
            mantissa: &self.mantissa * BigInt::from(rhs),
            scale: self.scale,
        }
    }

    /// Square root by Newton's method.
    ///
    /// Seeds from the `f64` root and iterates `x = (x + v/x) / 2` until two
    /// successive values differ by less than `threshold`, or `max_iterations`
    /// rounds have run. Returns the root and the number of rounds. Negative
    /// inputs yield `None`.
    pub fn sqrt(&self, threshold: &Decimal, max_iterations: usize) -> Option<(Self, usize)> {
        if self.is_negative() {
            return None;
        }
        if self.is_zero() {
            return Some((self.clone(), 0));
        }

        let mut x = Decimal::from_f64(self.to_f64().sqrt(), self.scale)
            .filter(|seed| !seed.is_zero() && !seed.is_negative())
            .unwrap_or_else(|| self.clone());

        for iteration in 1..=max_iterations {
            let quotient = self.checked_div(&x)?;
            let next = (&x + &quotient).div_int(2);
            let delta = (&x - &next).abs();
            trace!(iteration, "newton step");
            if delta < *threshold {
                return Some((next, iteration));
            }
            x = next;
        }

        warn!(max_iterations, "square root stopped at iteration cap");
        Some((x, max_iterations))
    }

    /// Decimal string with exactly `digits` fractional digits, truncated.
    ///
    /// `digits` may not exceed the scale.
    pub fn to_string_truncated(&self, digits: u32) -> String {
        debug_assert!(digits <= self.scale);
        let digits = digits.min(self.scale);

        let magnitude = self.mantissa.abs();
        let unit = pow10(self.scale);
        let integer = &magnitude / &unit;
        let fraction = &magnitude % &unit;

        let mut frac = fraction.to_string();
        let width = self.scale as usize;
        if frac.len() < width {
            frac = format!("{}{}", "0".repeat(width - frac.len()), frac);
        }
        frac.truncate(digits as usize);

        let sign = if self.mantissa.sign() == Sign::Minus
            && !(integer.is_zero() && frac.bytes().all(|b| b == b'0'))
        {
            "-"
        } else {
            ""
        };

        if digits == 0 {
            format!("{}{}", sign, integer)
        } else {
            format!("{}{}.{}", sign, integer, frac)
        }
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        debug_assert_eq!(self.scale, rhs.scale);
        Decimal {
            mantissa: &self.mantissa + &rhs.mantissa,
            scale: self.scale,
        }
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        debug_assert_eq!(self.scale, rhs.scale);
        Decimal {
            mantissa: &self.mantissa - &rhs.mantissa,
            scale: self.scale,
        }
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        debug_assert_eq!(self.scale, rhs.scale);
        Decimal {
            mantissa: &self.mantissa * &rhs.mantissa / pow10(self.scale),
            scale: self.scale,
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.mantissa.cmp(&other.mantissa),
            Ordering::Less => {
                (&self.mantissa * pow10(other.scale - self.scale)).cmp(&other.mantissa)
            }
            Ordering::Greater => self
                .mantissa
                .cmp(&(&other.mantissa * pow10(self.scale - other.scale))),
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_truncated(self.scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Decimal::from_ratio(3, 2, 4);
        let b = Decimal::from_ratio(1, 4, 4);
        assert_eq!((&a + &b).to_string(), "1.7500");
        assert_eq!((&b - &a).to_string(), "-1.2500");
        assert_eq!((&a * &b).to_string(), "0.3750");
        assert_eq!(a.checked_div(&b).map(|d| d.to_string()), Some("6.0000".to_string()));
        assert_eq!(a.checked_div(&Decimal::zero(4)), None);
    }

    #[test]
    fn test_truncation_not_rounding() {
        let third = Decimal::from_ratio(2, 3, 10);
        assert_eq!(third.to_string_truncated(4), "0.6666");
        assert_eq!(third.to_string_truncated(0), "0");

        let tiny_negative = Decimal::from_ratio(-1, 1000, 10);
        assert_eq!(tiny_negative.to_string_truncated(2), "0.00");
        assert_eq!(tiny_negative.to_string_truncated(3), "-0.001");
    }

    #[test]
    fn test_f64_round_trip() {
        let d = Decimal::from_f64(1.25, 20).expect("finite");
        assert_eq!(d.to_string_truncated(3), "1.250");
        assert!((d.to_f64() - 1.25).abs() < 1e-15);
        assert!(Decimal::from_f64(f64::NAN, 20).is_none());

        let coarse = Decimal::from_f64(0.125, 2).expect("finite");
        assert_eq!(coarse.to_string(), "0.12");
    }

    #[test]
    fn test_sqrt() {
        let scale = 30;
        // Truncated Newton steps can settle one unit apart
        let threshold = Decimal {
            mantissa: BigInt::from(100),
            scale,
        };
        let (root, iterations) = Decimal::from_integer(2, scale)
            .sqrt(&threshold, 100)
            .expect("non-negative");
        assert_eq!(root.to_string_truncated(25), "1.4142135623730950488016887");
        assert!(iterations < 10);

        let (zero, _) = Decimal::zero(scale).sqrt(&threshold, 100).expect("zero");
        assert!(zero.is_zero());
        assert!(Decimal::from_integer(-4, scale).sqrt(&threshold, 100).is_none());
    }

    #[test]
    fn test_epsilon() {
        assert_eq!(Decimal::epsilon(3, 5).to_string(), "0.00100");
        assert_eq!(Decimal::epsilon(9, 5).to_string(), "0.00001");
    }

    #[test]
    fn test_ordering_across_scales() {
        let a = Decimal::from_ratio(1, 2, 3);
        let b = Decimal::from_ratio(1, 3, 6);
        assert!(a > b);
        assert_eq!(Decimal::from_integer(1, 2).cmp(&Decimal::from_integer(1, 5)), Ordering::Equal);
    }
}
