//! Level-synchronized search for the nesting index.

use super::step::{step, StepOutcome};
use crate::word::Word;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Failures of a nesting index query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NestingError {
    /// The input has a letter occurring a number of times other than twice.
    /// The invariant is only defined on double occurrence words.
    #[error("not a double occurrence word")]
    NotDoubleOccurrence,

    /// A search level grew past the engine's configured frontier capacity.
    /// Recoverable per query: a batch run skips the word and continues.
    #[error("reduction frontier exceeded {limit} words")]
    FrontierLimit {
        /// The configured capacity that was exceeded.
        limit: usize,
    },
}

/// Breadth-first search engine over the reduction branching tree.
///
/// The search is level-synchronized: every word of level `n` is stepped
/// before level `n + 1` begins, because a terminal outcome anywhere in a
/// level fixes the nesting index at that level regardless of what the rest
/// of the level would produce. Candidate frontiers are deduplicated by exact
/// content equality on the relabeled words.
///
/// The search always terminates: every branch shrinks its word by at least
/// two letters, so the depth is bounded by half the input length.
#[derive(Debug, Clone, Default)]
pub struct ReductionEngine {
    frontier_limit: Option<usize>,
}

impl ReductionEngine {
    /// Engine with no resource bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the deduplicated frontier size; a query whose search outgrows
    /// the bound fails with [`NestingError::FrontierLimit`] instead of
    /// exhausting memory.
    pub fn with_frontier_limit(mut self, limit: usize) -> Self {
        self.frontier_limit = Some(limit);
        self
    }

    /// Compute the nesting index of `word`.
    ///
    /// The index is the fewest reduction levels after which some branch
    /// reaches the empty word: 0 for the empty word itself, and at least 1
    /// for every other double occurrence word.
    pub fn nesting_index(&self, word: &Word) -> Result<u32, NestingError> {
        if !word.is_double_occurrence() {
            return Err(NestingError::NotDoubleOccurrence);
        }
        if word.is_empty() {
            return Ok(0);
        }

        let mut frontier: FxHashSet<Word> = FxHashSet::default();
        frontier.insert(word.clone());
        let mut level: u32 = 0;

        loop {
            level += 1;
            let mut next: FxHashSet<Word> = FxHashSet::default();
            for current in &frontier {
                match step(current) {
                    // Shortest path to empty wins; the level count is the
                    // index no matter what the rest of the level yields.
                    StepOutcome::Terminal => return Ok(level),
                    StepOutcome::Branches(branches) => next.extend(branches),
                }
            }
            if let Some(limit) = self.frontier_limit {
                if next.len() > limit {
                    return Err(NestingError::FrontierLimit { limit });
                }
            }
            frontier = next;
        }
    }
}

/// Compute the nesting index of `word` with an unbounded engine.
///
/// Convenience for [`ReductionEngine::nesting_index`].
pub fn nesting_index(word: &Word) -> Result<u32, NestingError> {
    ReductionEngine::new().nesting_index(word)
}
