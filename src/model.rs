use serde::{Deserialize, Serialize};

/// Color written by every paint operation. The painter only ever covers
/// set cells, and set cells are painted white.
pub const WHITE: u32 = 1;

/// One horizontal paint operation over a single grid row, 1-based inclusive
/// on both axes. `row_start == row_end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintOp {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
    pub color: u32,
}

impl PaintOp {
    /// Build the operation covering columns `col_start..=col_end` of `row`.
    pub fn row_span(row: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            row_start: row,
            row_end: row,
            col_start,
            col_end,
            color: WHITE,
        }
    }

    /// Render the space-separated wire line for this operation.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.row_start, self.row_end, self.col_start, self.col_end, self.color
        )
    }
}

/// Why the stabilizer stopped iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// A pass reproduced its input; further passes would change nothing.
    FixedPoint,
    /// The pass budget ran out before a fixed point was observed.
    BudgetExhausted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothReport {
    pub values: Vec<i64>,
    pub passes: usize,
    pub stop_reason: StopReason,
}

impl SmoothReport {
    /// Human-readable one-liner for stderr.
    pub fn to_note(&self) -> String {
        match self.stop_reason {
            StopReason::FixedPoint => {
                format!("Stable after {} pass(es)", self.passes)
            }
            StopReason::BudgetExhausted => {
                format!("Pass budget exhausted after {} pass(es)", self.passes)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintReport {
    pub count: usize,
    pub operations: Vec<PaintOp>,
}

impl PaintReport {
    pub fn new(operations: Vec<PaintOp>) -> Self {
        Self {
            count: operations.len(),
            operations,
        }
    }

    /// Human-readable one-liner for stderr.
    pub fn to_note(&self) -> String {
        format!("{} paint operation(s)", self.count)
    }
}
