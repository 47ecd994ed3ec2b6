//! Function, derivative and tangent line.

use super::{Chart, Function, SampleRange, Series};
use crate::error::{MathError, MathResult};
use crate::format::format_component;

/// Chart of `f`, `f'` and the tangent to `f` at `at`.
pub fn derivative_chart(func: Function, range: &SampleRange, at: f64) -> MathResult<Chart> {
    range.validate()?;
    if !func.in_domain(at) {
        return Err(MathError::DomainError(format!(
            "{} is undefined at {}",
            func, at
        )));
    }

    let keep = |x: f64| func.in_domain(x);
    let slope = func.derivative(at);
    let value = func.eval(at);

    let series = vec![
        Series::sample(func.latex(), range, keep, |x| func.eval(x)),
        Series::sample(func.derivative_latex(), range, keep, |x| func.derivative(x)),
        Series::sample("\\text{tangent}", range, |_| true, |x| {
            value + slope * (x - at)
        }),
    ];

    Ok(Chart {
        title: format!("Derivative of {}", func),
        latex: Some(format!(
            "\\frac{{d}}{{dx}} {} = {}, \\quad f'({}) = {}",
            func.latex(),
            func.derivative_latex(),
            format_component(at),
            format_component(slope)
        )),
        series,
    })
}
