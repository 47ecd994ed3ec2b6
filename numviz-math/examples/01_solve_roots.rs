//! # Polynomial Roots Example
//!
//! This example solves one polynomial of each supported degree and prints the
//! roots the way the visualizer shows them.
//! It covers:
//! - Building a `Polynomial` from coefficients, highest degree first
//! - Solving with `RootSolver`
//! - LaTeX formatting of real and complex roots
//!
//! ## See Also
//! - [`RootSolver`](numviz_math::roots::RootSolver)
//! - [`format_root_set`](numviz_math::format::format_root_set)

use numviz_math::format::format_root_set;
use numviz_math::roots::{Polynomial, RootSolver};

fn main() {
    println!("=== numviz Math: Polynomial Roots ===\n");

    let cases: [(&str, Vec<f64>); 4] = [
        ("2x - 1", vec![2.0, -1.0]),
        ("x^2 + 1", vec![1.0, 0.0, 1.0]),
        ("x^3 - 6x^2 + 11x - 6", vec![1.0, -6.0, 11.0, -6.0]),
        ("x^4 - 5x^2 + 4", vec![1.0, 0.0, -5.0, 0.0, 4.0]),
    ];

    let mut solver = RootSolver::default_config();
    for (label, coefficients) in cases {
        let poly = match Polynomial::new(coefficients) {
            Ok(poly) => poly,
            Err(e) => {
                println!("{}: {}", label, e);
                continue;
            }
        };
        match solver.solve(&poly) {
            Ok(roots) => println!("{} = 0\n  {}\n", label, format_root_set(&roots)),
            Err(e) => println!("{}: {}\n", label, e),
        }
    }

    println!("Solved {} polynomials", solver.stats().solves);
}
