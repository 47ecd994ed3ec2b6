//! numviz Math - Numeric Core for an Educational Math Visualizer
//!
//! This crate holds every computation behind the visualizer; rendering is
//! left to the caller through the traits in [`render`].
//!
//! # Features
//!
//! - Closed-form roots of polynomials up to degree 4 (Cardano, trigonometric
//!   cubic, Ferrari) over `Complex64`
//! - LaTeX formatting of roots as reduced fractions on a 1/10000 grid
//! - Arbitrary-precision square roots, π, e and φ on a `BigInt` fixed-point
//!   decimal
//! - Newton divided-difference interpolation of integer sequences
//! - A pocket calculator as an immutable state machine
//! - Sampled series for derivative, limit, Taylor and Riemann-sum charts
//!
//! # Examples
//!
//! ## Solving a Quadratic
//!
//! ```
//! use numviz_math::format::format_root_set;
//! use numviz_math::roots::solve;
//!
//! let roots = solve(2, &[1.0, -3.0, 2.0]).expect("valid polynomial");
//! assert_eq!(roots.len(), 2);
//! assert_eq!(format_root_set(&roots), "x_{1} = 2 \\\\ x_{2} = 1");
//! ```
//!
//! ## High-Precision Constants
//!
//! ```
//! use numviz_math::precision::{Task, compute};
//!
//! let root = compute(Task::Sqrt, Some(2), 20).expect("within bounds");
//! assert_eq!(root, "1.41421356237309504880");
//! ```
//!
//! ## Predicting a Sequence
//!
//! ```
//! use numviz_math::interpolation::interpolate;
//!
//! let poly = interpolate(&[1.0, 4.0, 9.0, 16.0]);
//! assert_eq!(poly.predict(2), vec![25.0, 36.0]);
//! ```

pub mod calculator;
pub mod error;
pub mod format;
pub mod input;
pub mod interpolation;
pub mod plots;
pub mod precision;
pub mod render;
pub mod roots;

pub use calculator::{CalculatorState, Key, Operator};
pub use error::{MathError, MathResult};
pub use format::{format_component, format_root, format_root_set};
pub use interpolation::{NewtonPolynomial, SequencePredictor, SequenceReport, interpolate};
pub use plots::{Chart, Function, SampleRange, Series};
pub use precision::{Decimal, PrecisionEngine, PrecisionRequest, PrecisionResult, Task};
pub use render::{ChartRenderer, MarkupRenderer};
pub use roots::{Polynomial, RootSet, RootSolver};
