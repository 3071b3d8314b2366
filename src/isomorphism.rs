//! Cyclic/reflective isomorphism class enumeration.
//!
//! Two double occurrence words are cyclically equivalent when one is a
//! rotation of the other, possibly reversed, up to relabeling. The class of
//! a word is the set of canonical forms its rotations (and its reversal's
//! rotations) produce. Members of one class can recognize different nesting
//! indices, since a rotation can split a removable subword across the word
//! boundary; that is exactly why enumerating the class and reducing each
//! member separately is useful.

use crate::word::Word;
use rustc_hash::FxHashSet;

/// Enumerate the isomorphism class of `word`.
///
/// Every left rotation of the word is relabeled and collected, then the
/// sweep repeats over the reversal (itself relabeled before rotating, since
/// reversal alone does not preserve canonical labeling). Members are
/// deduplicated by exact content equality and returned in discovery order,
/// so the canonical form of `word` itself comes first. The class size is
/// between 1 and twice the word's length.
pub fn isomorphism_class(word: &Word) -> Vec<Word> {
    if word.is_empty() {
        return vec![Word::new()];
    }

    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut class = Vec::new();
    let mut collect = |candidate: Word| {
        if seen.insert(candidate.clone()) {
            class.push(candidate);
        }
    };

    for offset in 0..word.len() {
        collect(word.rotated(offset).relabel());
    }
    let reversed = word.reversed();
    for offset in 0..reversed.len() {
        collect(reversed.rotated(offset).relabel());
    }

    class
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Letter;

    fn word(letters: &[Letter]) -> Word {
        Word::from_letters(letters.iter().copied())
    }

    #[test]
    fn test_class_of_empty_word() {
        assert_eq!(isomorphism_class(&Word::new()), vec![Word::new()]);
    }

    #[test]
    fn test_class_contains_own_canonical_form() {
        let w = word(&[3, 1, 2, 1, 2, 3]);
        let class = isomorphism_class(&w);
        assert_eq!(class[0], w.relabel());
    }

    #[test]
    fn test_class_of_nested_pair() {
        // the four rotations of 1221 relabel to just two canonical forms,
        // and the reversal sweep adds none
        let class = isomorphism_class(&word(&[1, 2, 2, 1]));
        assert_eq!(class, vec![word(&[1, 2, 2, 1]), word(&[1, 1, 2, 2])]);
    }

    #[test]
    fn test_class_of_crossing_pair_is_singleton() {
        let class = isomorphism_class(&word(&[1, 2, 1, 2]));
        assert_eq!(class, vec![word(&[1, 2, 1, 2])]);
    }

    #[test]
    fn test_class_is_relabel_invariant() {
        // structurally identical words have identical classes
        let class_a = isomorphism_class(&word(&[1, 2, 2, 3, 3, 1]));
        let class_b = isomorphism_class(&word(&[5, 9, 9, 2, 2, 5]));
        assert_eq!(class_a, class_b);
    }

    #[test]
    fn test_class_size_bounds() {
        for letters in [&[1, 1][..], &[1, 2, 2, 1][..], &[1, 2, 1, 3, 2, 3][..]] {
            let w = word(letters);
            let class = isomorphism_class(&w);
            assert!(!class.is_empty());
            assert!(
                class.len() <= 2 * w.len(),
                "class of {w} has {} members",
                class.len()
            );
        }
    }

    #[test]
    fn test_members_are_distinct() {
        let class = isomorphism_class(&word(&[1, 2, 1, 3, 2, 3]));
        let unique: FxHashSet<_> = class.iter().cloned().collect();
        assert_eq!(unique.len(), class.len());
    }
}
