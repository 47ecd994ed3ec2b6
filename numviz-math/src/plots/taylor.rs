//! Taylor polynomials of the built-in functions.

use super::{Chart, Function, SampleRange, Series};
use crate::error::{MathError, MathResult};
use crate::format::format_component;

/// Highest order offered; factorials past this lose all precision in `f64`.
pub const MAX_TAYLOR_ORDER: u32 = 20;

/// Coefficients `f⁽ᵏ⁾(center) / k!` for `k = 0..=order`.
pub fn taylor_coefficients(func: Function, center: f64, order: u32) -> MathResult<Vec<f64>> {
    if order > MAX_TAYLOR_ORDER {
        return Err(MathError::InvalidRange(format!(
            "order must be at most {}, got {}",
            MAX_TAYLOR_ORDER, order
        )));
    }
    if !func.in_domain(center) {
        return Err(MathError::DomainError(format!(
            "{} is undefined at {}",
            func, center
        )));
    }

    let mut factorial = 1.0;
    Ok((0..=order)
        .map(|k| {
            if k > 0 {
                factorial *= k as f64;
            }
            func.nth_derivative(k, center) / factorial
        })
        .collect())
}

/// Evaluate `Σ cₖ (x − center)ᵏ` by Horner's scheme.
pub fn taylor_eval(coefficients: &[f64], center: f64, x: f64) -> f64 {
    let t = x - center;
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Chart of `func` against its Taylor polynomial of the given order.
pub fn taylor_chart(
    func: Function,
    center: f64,
    order: u32,
    range: &SampleRange,
) -> MathResult<Chart> {
    range.validate()?;
    let coefficients = taylor_coefficients(func, center, order)?;

    let label = format!("T_{{{}}}(x)", order);
    Ok(Chart {
        title: format!("Taylor polynomial of {} (order {})", func, order),
        latex: Some(format!(
            "{} = \\sum_{{k=0}}^{{{}}} \\frac{{f^{{(k)}}({})}}{{k!}} (x - {})^k",
            label,
            order,
            format_component(center),
            format_component(center)
        )),
        series: vec![
            Series::sample(func.latex(), range, |x| func.in_domain(x), |x| func.eval(x)),
            Series::sample(label, range, |_| true, |x| {
                taylor_eval(&coefficients, center, x)
            }),
        ],
    })
}
