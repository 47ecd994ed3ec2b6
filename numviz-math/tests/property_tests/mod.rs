//! Property-based tests for numviz-math
//!
//! This module contains property tests for:
//! - Closed-form polynomial roots
//! - Arbitrary-precision square roots and constants
//! - Sequence interpolation and prediction

mod interpolation_properties;
mod precision_properties;
mod root_properties;
