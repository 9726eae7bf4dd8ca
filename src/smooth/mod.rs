//! Circular 3-point median smoothing.
//!
//! Each pass replaces every element with the median of itself and its two
//! circular neighbors, reading only the pre-pass array. Passes repeat until
//! the array reaches a fixed point or the pass budget runs out.

use crate::model::{SmoothReport, StopReason};

/// Middle value of three after ascending sort. If two values are equal,
/// that value is the median.
pub fn median3(a: i64, b: i64, c: i64) -> i64 {
    let mut w = [a, b, c];
    w.sort_unstable();
    w[1]
}

/// One synchronous smoothing pass. Every read sees the input array, never
/// the in-progress output. With a single element both neighbors are the
/// element itself, so the pass is the identity.
pub fn transform(values: &[i64]) -> Vec<i64> {
    let n = values.len();
    (0..n)
        .map(|i| {
            let prev = values[(i + n - 1) % n];
            let next = values[(i + 1) % n];
            median3(prev, values[i], next)
        })
        .collect()
}

/// Apply up to `max_passes` smoothing passes, stopping early once a pass
/// reproduces its input. The pass that detects the fixed point counts
/// against the budget.
pub fn stabilize(mut values: Vec<i64>, max_passes: usize) -> SmoothReport {
    let mut passes = 0;
    let mut stop_reason = StopReason::BudgetExhausted;
    for _ in 0..max_passes {
        let next = transform(&values);
        passes += 1;
        if next == values {
            stop_reason = StopReason::FixedPoint;
            break;
        }
        values = next;
    }
    SmoothReport {
        values,
        passes,
        stop_reason,
    }
}
