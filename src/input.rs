//! Problem-text acquisition and tokenization.
//!
//! Both subcommands consume one whitespace-separated token stream read to
//! completion at startup, either from stdin or from a `--input` file.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole problem text from a file, or from stdin when no path is given.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read input file {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Whitespace-delimited token scanner over the problem text.
pub struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
        }
    }

    /// Next raw token; `what` names the field for error context.
    pub fn next_token(&mut self, what: &str) -> Result<&'a str> {
        self.iter
            .next()
            .with_context(|| format!("input ended before {what}"))
    }

    pub fn next_usize(&mut self, what: &str) -> Result<usize> {
        let tok = self.next_token(what)?;
        tok.parse()
            .with_context(|| format!("{what}: expected a non-negative integer, got {tok:?}"))
    }

    pub fn next_i64(&mut self, what: &str) -> Result<i64> {
        let tok = self.next_token(what)?;
        tok.parse()
            .with_context(|| format!("{what}: expected an integer, got {tok:?}"))
    }

    /// Reject trailing garbage after the declared input has been consumed.
    pub fn finish(mut self) -> Result<()> {
        if let Some(extra) = self.iter.next() {
            bail!("unexpected trailing token {extra:?}");
        }
        Ok(())
    }
}
