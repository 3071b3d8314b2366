//! Double occurrence word model.
//!
//! A [`Word`] is an ordered sequence of letter tokens. The letters themselves
//! carry no meaning beyond identity: two words describe the same structure
//! whenever one can be relabeled into the other, which is why most consumers
//! work with the canonical form produced by [`Word::relabel`].

mod parse;

pub use parse::ParseError;

use smallvec::SmallVec;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::str::FromStr;

/// A letter token within a word.
///
/// Letters are small natural numbers used only as comparable tokens; a
/// letter's identity is positional (which pair it belongs to), not numeric.
pub type Letter = u16;

/// Inline storage threshold: words of up to 16 letters (8 distinct pairs)
/// stay on the stack. Reduction shrinks words, so everything derived from a
/// small input stays allocation-free.
pub(crate) type LetterSeq = SmallVec<[Letter; 16]>;

/// An ordered, finite sequence of letter tokens.
///
/// A word is a *double occurrence word* (DOW) when every distinct letter
/// occurs in it exactly twice; [`Word::is_double_occurrence`] checks this.
/// Words are value types: every derived word (rotation, reversal, reduction
/// branch) is freshly owned, so no sequence is ever shared between two
/// independently tracked collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Word {
    letters: LetterSeq,
}

impl Word {
    /// Create the empty word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a word from a sequence of letters.
    pub fn from_letters(letters: impl IntoIterator<Item = Letter>) -> Self {
        Self {
            letters: letters.into_iter().collect(),
        }
    }

    /// Parse a word from text.
    ///
    /// Two input forms are accepted:
    ///
    /// - a compact digit string, one letter per digit: `"121323"`
    /// - a punctuation-delimited list of multi-digit letters: `"1,12,1,12"`
    ///
    /// See [`ParseError`] for the rejection cases.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse::parse_word(text)
    }

    /// Number of letters (counting both occurrences).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check whether this is the empty word.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters in sequence order.
    #[inline(always)]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Check whether every distinct letter occurs exactly twice.
    ///
    /// The empty word is trivially a double occurrence word.
    pub fn is_double_occurrence(&self) -> bool {
        let mut counts: FxHashMap<Letter, u8> = FxHashMap::default();
        for &letter in &self.letters {
            let count = counts.entry(letter).or_insert(0);
            *count += 1;
            if *count > 2 {
                return false;
            }
        }
        counts.values().all(|&count| count == 2)
    }

    /// Distinct letters in first-occurrence order.
    pub fn distinct_letters(&self) -> Vec<Letter> {
        let mut seen: FxHashSet<Letter> = FxHashSet::default();
        let mut distinct = Vec::with_capacity(self.letters.len() / 2);
        for &letter in &self.letters {
            if seen.insert(letter) {
                distinct.push(letter);
            }
        }
        distinct
    }

    /// Relabel to canonical form.
    ///
    /// Letter pairs are renumbered `1, 2, 3, ...` in order of each pair's first
    /// occurrence, scanning left to right. Two words have the same canonical
    /// form iff they are structurally identical as DOWs, so canonical forms
    /// are what the reduction engine and the isomorphism enumerator compare.
    ///
    /// Idempotent: `w.relabel().relabel() == w.relabel()`.
    pub fn relabel(&self) -> Word {
        let mut labels: FxHashMap<Letter, Letter> = FxHashMap::default();
        let mut next_label: Letter = 1;
        let letters = self
            .letters
            .iter()
            .map(|&letter| {
                *labels.entry(letter).or_insert_with(|| {
                    let label = next_label;
                    next_label += 1;
                    label
                })
            })
            .collect();
        Word { letters }
    }

    /// Rotate left by `offset` positions, with wrap-around.
    ///
    /// `offset` must be less than the word's length (any offset is accepted
    /// for the empty word, returning it unchanged).
    pub fn rotated(&self, offset: usize) -> Word {
        if self.letters.is_empty() {
            return self.clone();
        }
        let mut letters = LetterSeq::with_capacity(self.letters.len());
        letters.extend_from_slice(&self.letters[offset..]);
        letters.extend_from_slice(&self.letters[..offset]);
        Word { letters }
    }

    /// Reverse the letter order, then relabel.
    ///
    /// Reversal alone does not preserve canonical labeling, so the result is
    /// canonicalized before it is handed to the rotation sweep.
    pub fn reversed(&self) -> Word {
        let letters = self.letters.iter().rev().copied().collect();
        Word { letters }.relabel()
    }

    /// Remove both occurrences of `letter`, preserving the order of the rest.
    pub fn without_letter(&self, letter: Letter) -> Word {
        let letters = self
            .letters
            .iter()
            .copied()
            .filter(|&l| l != letter)
            .collect();
        Word { letters }
    }

    /// Remove every occurrence of every letter in `letters`, preserving the
    /// order of the rest.
    pub fn without_letters(&self, letters: &FxHashSet<Letter>) -> Word {
        let letters = self
            .letters
            .iter()
            .copied()
            .filter(|l| !letters.contains(l))
            .collect();
        Word { letters }
    }
}

impl FromStr for Word {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::parse(s)
    }
}

impl fmt::Display for Word {
    /// Short words print as concatenated digits; words of 20 or more letters
    /// switch to comma delimitation since their labels reach two digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.letters.len() >= 20 {
            for (i, letter) in self.letters.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{letter}")?;
            }
        } else {
            for letter in &self.letters {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
