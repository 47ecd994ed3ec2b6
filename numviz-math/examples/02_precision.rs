//! # High-Precision Constants Example
//!
//! This example computes square roots and the constants π, e and φ to a
//! chosen number of decimal places.
//! It covers:
//! - `PrecisionRequest` validation
//! - `PrecisionEngine` statistics
//! - Rejected requests
//!
//! ## See Also
//! - [`PrecisionEngine`](numviz_math::precision::PrecisionEngine)

use numviz_math::precision::{PrecisionEngine, PrecisionRequest, Task};

fn main() {
    println!("=== numviz Math: High-Precision Constants ===\n");

    let mut engine = PrecisionEngine::default_config();
    let requests = [
        PrecisionRequest::new(Task::Sqrt, Some(2), 60),
        PrecisionRequest::new(Task::Pi, None, 60),
        PrecisionRequest::new(Task::E, None, 60),
        PrecisionRequest::new(Task::Phi, None, 60),
        // Rejected: below the minimum digit count
        PrecisionRequest::new(Task::Pi, None, 5),
    ];

    for request in &requests {
        match engine.compute(request) {
            Ok(result) => println!(
                "{:>5} ({} iterations): {}",
                result.task, result.iterations, result.value
            ),
            Err(e) => println!("{:>5}: {}", request.task, e),
        }
    }

    let stats = engine.stats();
    println!(
        "\n{} computed, {} rejected, {} iterations in total",
        stats.computations, stats.rejected, stats.total_iterations
    );
}
