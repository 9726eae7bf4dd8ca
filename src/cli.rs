use crate::input::{self, Tokens};
use crate::model::PaintReport;
use crate::{paint, render, smooth};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "scanline",
    version,
    about = "Circular median smoothing and scanline run painting"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Read the problem text from a file instead of stdin
    #[arg(long, global = true)]
    pub input: Option<std::path::PathBuf>,

    /// Print the result as JSON and exit (no plain-text output)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress the stderr summary line
    #[arg(long, global = true)]
    pub silent: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Repeatedly apply a circular 3-point median filter until the array stabilizes
    Smooth,
    /// Cover every horizontal run of set cells with one paint operation
    Paint,
}

pub fn run(args: Cli) -> Result<()> {
    let text = input::read_source(args.input.as_deref())?;
    match args.command {
        Command::Smooth => run_smooth(&text, &args),
        Command::Paint => run_paint(&text, &args),
    }
}

/// Parse `n k` followed by the `n` array values.
fn parse_smooth_input(text: &str) -> Result<(Vec<i64>, usize)> {
    let mut tokens = Tokens::new(text);
    let n = tokens.next_usize("array length n")?;
    if n == 0 {
        bail!("array length n must be at least 1");
    }
    let budget = tokens.next_usize("pass budget k")?;
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        values.push(tokens.next_i64(&format!("a[{i}]"))?);
    }
    tokens.finish()?;
    Ok((values, budget))
}

/// Parse `n m` followed by the `n` grid rows, validating width and alphabet.
fn parse_paint_input(text: &str) -> Result<Vec<String>> {
    let mut tokens = Tokens::new(text);
    let n = tokens.next_usize("row count n")?;
    let m = tokens.next_usize("column count m")?;
    let mut grid = Vec::with_capacity(n);
    for i in 0..n {
        let row = tokens.next_token(&format!("grid row {i}"))?;
        if row.len() != m {
            bail!("grid row {i} has {} cells, expected {m}", row.len());
        }
        if let Some(bad) = row.chars().find(|c| *c != '0' && *c != '1') {
            bail!("grid row {i} contains {bad:?}, expected only '0' or '1'");
        }
        grid.push(row.to_string());
    }
    tokens.finish()?;
    Ok(grid)
}

/// Write result lines through one locked, buffered stdout handle.
fn write_lines(lines: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = std::io::LineWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{line}").context("failed to write result")?;
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn run_smooth(text: &str, args: &Cli) -> Result<()> {
    let (values, budget) = parse_smooth_input(text)?;
    let report = smooth::stabilize(values, budget);

    if args.json {
        let out = serde_json::to_string_pretty(&report)?;
        write_lines(&[out])?;
    } else {
        write_lines(&render::smooth_summary(&report).lines)?;
    }
    if !args.silent {
        eprintln!("{}", report.to_note());
    }
    Ok(())
}

fn run_paint(text: &str, args: &Cli) -> Result<()> {
    let grid = parse_paint_input(text)?;
    let report = PaintReport::new(paint::build_operations(&grid));

    if args.json {
        let out = serde_json::to_string_pretty(&report)?;
        write_lines(&[out])?;
    } else {
        write_lines(&render::paint_summary(&report).lines)?;
    }
    if !args.silent {
        eprintln!("{}", report.to_note());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SmoothReport, StopReason};

    fn smooth_report(text: &str) -> SmoothReport {
        let (values, budget) = parse_smooth_input(text).unwrap();
        smooth::stabilize(values, budget)
    }

    #[test]
    fn test_cli_parses_subcommands_and_flags() {
        let args = Cli::try_parse_from(["scanline", "smooth", "--json", "--silent"]).unwrap();
        assert!(matches!(args.command, Command::Smooth));
        assert!(args.json);
        assert!(args.silent);

        let args = Cli::try_parse_from(["scanline", "paint", "--input", "grid.txt"]).unwrap();
        assert!(matches!(args.command, Command::Paint));
        assert_eq!(args.input.unwrap().to_str(), Some("grid.txt"));

        assert!(Cli::try_parse_from(["scanline"]).is_err());
    }

    #[test]
    fn test_parse_smooth_input() {
        let (values, budget) = parse_smooth_input("5 1\n1 5 2 8 3\n").unwrap();
        assert_eq!(values, vec![1, 5, 2, 8, 3]);
        assert_eq!(budget, 1);
    }

    #[test]
    fn test_parse_smooth_input_rejects_bad_shapes() {
        assert!(parse_smooth_input("0 1").is_err());
        assert!(parse_smooth_input("3 1 1 2").is_err());
        assert!(parse_smooth_input("2 1 1 2 3").is_err());
        assert!(parse_smooth_input("2 x 1 2").is_err());
    }

    #[test]
    fn test_parse_paint_input() {
        let grid = parse_paint_input("2 3\n111\n000\n").unwrap();
        assert_eq!(grid, vec!["111".to_string(), "000".to_string()]);
    }

    #[test]
    fn test_parse_paint_input_rejects_bad_rows() {
        assert!(parse_paint_input("1 3\n11\n").is_err());
        assert!(parse_paint_input("1 3\n121\n").is_err());
        assert!(parse_paint_input("2 3\n111\n").is_err());
    }

    #[test]
    fn test_smooth_end_to_end_lines() {
        let report = smooth_report("5 1\n1 5 2 8 3\n");
        assert_eq!(render::smooth_summary(&report).lines, vec!["3 2 5 3 3"]);
        assert_eq!(report.passes, 1);
    }

    #[test]
    fn test_smooth_stable_input_ignores_large_budget() {
        let report = smooth_report("3 10\n1 1 1\n");
        assert_eq!(render::smooth_summary(&report).lines, vec!["1 1 1"]);
        assert_eq!(report.passes, 1);
        assert_eq!(report.stop_reason, StopReason::FixedPoint);
    }

    #[test]
    fn test_paint_end_to_end_lines() {
        let grid = parse_paint_input("1 5\n01101\n").unwrap();
        let report = PaintReport::new(paint::build_operations(&grid));
        assert_eq!(
            render::paint_summary(&report).lines,
            vec!["2", "1 1 2 3 1", "1 1 5 5 1"]
        );

        let grid = parse_paint_input("2 3\n111\n000\n").unwrap();
        let report = PaintReport::new(paint::build_operations(&grid));
        assert_eq!(render::paint_summary(&report).lines, vec!["1", "1 1 1 3 1"]);
    }
}
