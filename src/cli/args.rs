//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "libnesting")]
#[command(about = "Nesting index computation for double occurrence words")]
#[command(version)]
pub struct Cli {
    /// Abort any query whose search frontier grows beyond this many words
    #[arg(long, global = true)]
    pub frontier_limit: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the nesting index of a single word
    Query {
        /// Word as compact digits (121323) or delimited letters (1,2,1,3,2,3)
        word: String,
    },

    /// List a word's cyclic equivalence class with each member's index
    Isos {
        /// Word as compact digits or delimited letters
        word: String,
    },

    /// Compute nesting indices for a whitespace-delimited word list
    Batch {
        /// Input text file of words
        input: PathBuf,

        /// Write results here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Tally how many words in a list recognize each nesting index
    Tally {
        /// Input text file of words
        input: PathBuf,
    },
}
