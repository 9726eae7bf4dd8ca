//! Text output builders for CLI results.
//!
//! This module formats reports into printable stdout lines; the writer in
//! `cli` decides where they go.

use crate::model::{PaintReport, SmoothReport};

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// One line: the final array, space-separated.
pub(crate) fn smooth_summary(report: &SmoothReport) -> TextSummary {
    let line = report
        .values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    TextSummary { lines: vec![line] }
}

/// Count line followed by one line per operation.
pub(crate) fn paint_summary(report: &PaintReport) -> TextSummary {
    let mut lines = Vec::with_capacity(report.count + 1);
    lines.push(report.count.to_string());
    for op in &report.operations {
        lines.push(op.to_line());
    }
    TextSummary { lines }
}
