mod cli;
mod input;
mod model;
mod paint;
mod render;
mod smooth;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
