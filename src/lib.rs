//! # libnesting
//!
//! Nesting index computation for double occurrence words.
//!
//! A *double occurrence word* (DOW) is a finite sequence over a finite
//! alphabet in which every letter occurs exactly twice; such words model
//! scan patterns arising in DNA recombination. The *nesting index* measures
//! how far a word is from being reducible in one pass: it is the fewest
//! rounds of a non-deterministic reduction (removing maximal repeat/return
//! subwords, or single letter pairs) after which some branch reaches the
//! empty word. For the formal definition of the invariant see
//! <http://arxiv.org/abs/1311.3543> and
//! <http://scholarcommons.usf.edu/etd/4979/>.
//!
//! ## Example
//!
//! ```rust
//! use libnesting::prelude::*;
//!
//! let word: Word = "121323".parse()?;
//! assert_eq!(nesting_index(&word)?, 2);
//!
//! // reduce each member of the word's cyclic equivalence class; for this
//! // word every member needs two levels
//! for member in isomorphism_class(&word) {
//!     assert_eq!(nesting_index(&member)?, 2);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod isomorphism;
pub mod reduction;
pub mod subword;
pub mod word;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::isomorphism::isomorphism_class;
    pub use crate::reduction::{nesting_index, NestingError, ReductionEngine, StepOutcome};
    pub use crate::subword::{find_maximal_subwords, Subword, SubwordKind};
    pub use crate::word::{Letter, ParseError, Word};
}
