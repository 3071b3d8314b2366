//! The nesting reduction process.
//!
//! [`step`] performs one non-deterministic reduction step on a word,
//! producing every candidate successor; [`ReductionEngine`] drives a
//! level-synchronized breadth-first search over the branching tree those
//! steps generate, until some branch collapses to the empty word. The number
//! of levels taken is the word's *nesting index*.

mod engine;
mod step;

pub use engine::{nesting_index, NestingError, ReductionEngine};
pub use step::{step, StepOutcome};
