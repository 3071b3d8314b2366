//! Command-line tool for nesting index computation.
//!
//! This binary computes the nesting index of double occurrence words given
//! directly on the command line or in whitespace-delimited word lists, and
//! can enumerate cyclic equivalence classes and per-index frequency tables.

use anyhow::Result;
use clap::Parser;
use libnesting::cli::{commands, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::execute(cli)
}
