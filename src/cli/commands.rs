//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::isomorphism::isomorphism_class;
use crate::reduction::{NestingError, ReductionEngine};
use crate::word::Word;

use super::args::{Cli, Commands};

/// Execute a CLI invocation
pub fn execute(cli: Cli) -> Result<()> {
    let engine = match cli.frontier_limit {
        Some(limit) => ReductionEngine::new().with_frontier_limit(limit),
        None => ReductionEngine::new(),
    };

    match cli.command {
        Commands::Query { word } => cmd_query(&word, &engine),
        Commands::Isos { word } => cmd_isos(&word, &engine),
        Commands::Batch { input, output } => cmd_batch(&input, output.as_deref(), &engine),
        Commands::Tally { input } => cmd_tally(&input, &engine),
    }
}

fn cmd_query(text: &str, engine: &ReductionEngine) -> Result<()> {
    let word = Word::parse(text).with_context(|| format!("Failed to parse word: {text}"))?;

    match engine.nesting_index(&word) {
        Ok(index) => println!("{word}: {index}"),
        Err(NestingError::NotDoubleOccurrence) => {
            println!("{word}: {}", "not a double occurrence word".yellow());
        }
        Err(err) => return Err(err).with_context(|| format!("Failed to reduce word: {word}")),
    }
    Ok(())
}

fn cmd_isos(text: &str, engine: &ReductionEngine) -> Result<()> {
    let word = Word::parse(text).with_context(|| format!("Failed to parse word: {text}"))?;

    if !word.is_double_occurrence() {
        println!("{word}: {}", "not a double occurrence word".yellow());
        return Ok(());
    }

    for member in isomorphism_class(&word) {
        let index = engine
            .nesting_index(&member)
            .with_context(|| format!("Failed to reduce class member: {member}"))?;
        println!("{member}: {index}");
    }
    Ok(())
}

fn cmd_batch(input: &Path, output: Option<&Path>, engine: &ReductionEngine) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to open word list: {}", input.display()))?;

    let summary = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let summary = batch_report(&text, engine, &mut writer)?;
            writer.flush()?;
            summary
        }
        None => batch_report(&text, engine, &mut std::io::stdout().lock())?,
    };

    if summary.skipped > 0 {
        eprintln!(
            "{}",
            format!("Skipped {} of {} words", summary.skipped, summary.total()).yellow()
        );
    }
    Ok(())
}

fn cmd_tally(input: &Path, engine: &ReductionEngine) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to open word list: {}", input.display()))?;

    let (counts, skipped) = tally_counts(&text, engine);
    for (index, count) in &counts {
        println!("NI = {index}: {count}");
    }
    if skipped > 0 {
        eprintln!("{}", format!("Skipped {skipped} words").yellow());
    }
    Ok(())
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Words whose index was written out.
    pub processed: usize,
    /// Words skipped over (malformed, non-DOW, or past the engine's bound).
    pub skipped: usize,
}

impl BatchSummary {
    /// Total number of input words seen.
    pub fn total(&self) -> usize {
        self.processed + self.skipped
    }
}

/// Compute and write `word: index` lines for every whitespace-delimited word
/// in `text`.
///
/// A word the engine cannot answer for does not stop the run: malformed
/// tokens and frontier overflows are reported on stderr and skipped, words
/// that are not double occurrence get a diagnostic line in the report
/// itself.
pub fn batch_report<W: Write>(
    text: &str,
    engine: &ReductionEngine,
    out: &mut W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary {
        processed: 0,
        skipped: 0,
    };

    for token in text.split_whitespace() {
        let word = match Word::parse(token) {
            Ok(word) => word,
            Err(err) => {
                eprintln!("{}", format!("Skipping {token}: {err}").yellow());
                summary.skipped += 1;
                continue;
            }
        };
        match engine.nesting_index(&word) {
            Ok(index) => {
                writeln!(out, "{word}: {index}")?;
                summary.processed += 1;
            }
            Err(NestingError::NotDoubleOccurrence) => {
                writeln!(out, "{word}: not a double occurrence word")?;
                summary.skipped += 1;
            }
            Err(err) => {
                eprintln!("{}", format!("Skipping {word}: {err}").yellow());
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

/// Count how many words in `text` recognize each nesting index.
///
/// Returns the per-index frequencies (ordered by index) and the number of
/// words skipped. The table grows with the indices actually seen; there is
/// no fixed ceiling on the index.
pub fn tally_counts(text: &str, engine: &ReductionEngine) -> (BTreeMap<u32, u64>, usize) {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    let mut skipped = 0usize;

    for token in text.split_whitespace() {
        let index = Word::parse(token)
            .map_err(|err| eprintln!("{}", format!("Skipping {token}: {err}").yellow()))
            .and_then(|word| {
                engine
                    .nesting_index(&word)
                    .map_err(|err| eprintln!("{}", format!("Skipping {token}: {err}").yellow()))
            });
        match index {
            Ok(index) => *counts.entry(index).or_insert(0) += 1,
            Err(()) => skipped += 1,
        }
    }
    (counts, skipped)
}
