//! Scanline run painting over a binary grid.
//!
//! Each row is scanned left to right; every maximal run of `'1'` cells
//! becomes one single-row paint operation. Rows never share operations.

use crate::model::PaintOp;

/// 0-based inclusive spans of maximal `'1'` runs in one row, left to right.
/// A row without a `'1'` yields no spans.
pub fn find_runs(row: &str) -> Vec<(usize, usize)> {
    let cells = row.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;
    while i < cells.len() {
        if cells[i] == b'1' {
            let start = i;
            while i < cells.len() && cells[i] == b'1' {
                i += 1;
            }
            runs.push((start, i - 1));
        } else {
            i += 1;
        }
    }
    runs
}

/// Emit one 1-based operation per run, row-major. All operations for row
/// `i` precede those for row `i + 1`; within a row the scan order keeps
/// columns increasing.
pub fn build_operations(grid: &[String]) -> Vec<PaintOp> {
    let mut ops = Vec::new();
    for (i, row) in grid.iter().enumerate() {
        for (start, end) in find_runs(row) {
            ops.push(PaintOp::row_span(i + 1, start + 1, end + 1));
        }
    }
    ops
}
