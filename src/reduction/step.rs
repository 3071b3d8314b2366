//! One reduction step.

use crate::subword::find_maximal_subwords;
use crate::word::Word;
use rustc_hash::FxHashSet;

/// Result of one reduction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The word reaches the empty word at the next level: either it has at
    /// most four letters, or removing its maximal subwords removes
    /// everything.
    Terminal,
    /// Candidate reduced words, one per branch, each relabeled to canonical
    /// form and strictly smaller than the input by an even amount.
    Branches(Vec<Word>),
}

/// Perform one reduction step on a validated double occurrence word.
///
/// Branch construction:
///
/// - If maximal subwords exist, branch 0 removes every letter covered by any
///   of them. When that empties the word the step is [`StepOutcome::Terminal`]
///   outright: reaching empty through subword removal alone takes priority
///   over every other branch. Otherwise one further branch removes each
///   *free* letter (one covered by no subword).
/// - With no subwords, there is one branch per distinct letter.
///
/// Any DOW of four or fewer letters is terminal by definition of the
/// invariant.
///
/// Callers are responsible for validating double occurrence up front; the
/// engine checks once per query.
pub fn step(word: &Word) -> StepOutcome {
    if word.len() <= 4 {
        return StepOutcome::Terminal;
    }

    match find_maximal_subwords(word) {
        Some(subwords) => {
            let covered: FxHashSet<_> = subwords
                .iter()
                .flat_map(|s| s.letters().iter().copied())
                .collect();

            let stripped = word.without_letters(&covered).relabel();
            if stripped.is_empty() {
                return StepOutcome::Terminal;
            }

            let free_letters: Vec<_> = word
                .distinct_letters()
                .into_iter()
                .filter(|letter| !covered.contains(letter))
                .collect();

            let mut branches = Vec::with_capacity(1 + free_letters.len());
            branches.push(stripped);
            for letter in free_letters {
                branches.push(word.without_letter(letter).relabel());
            }
            StepOutcome::Branches(branches)
        }
        None => {
            let branches = word
                .distinct_letters()
                .into_iter()
                .map(|letter| word.without_letter(letter).relabel())
                .collect();
            StepOutcome::Branches(branches)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Letter;

    fn word(letters: &[Letter]) -> Word {
        Word::from_letters(letters.iter().copied())
    }

    #[test]
    fn test_small_words_are_terminal() {
        assert_eq!(step(&word(&[1, 1])), StepOutcome::Terminal);
        assert_eq!(step(&word(&[1, 2, 1, 2])), StepOutcome::Terminal);
        assert_eq!(step(&word(&[1, 2, 2, 1])), StepOutcome::Terminal);
    }

    #[test]
    fn test_subword_removal_emptying_word_is_terminal() {
        // one return word covering everything
        assert_eq!(step(&word(&[1, 2, 3, 3, 2, 1])), StepOutcome::Terminal);
        // two loops and a return word covering everything
        assert_eq!(step(&word(&[1, 1, 2, 3, 3, 2])), StepOutcome::Terminal);
    }

    #[test]
    fn test_no_subwords_branches_per_distinct_letter() {
        // 121323 has no subword structure; drop each of its three letters
        let outcome = step(&word(&[1, 2, 1, 3, 2, 3]));
        let StepOutcome::Branches(branches) = outcome else {
            panic!("expected branches");
        };
        assert_eq!(
            branches,
            vec![
                word(&[1, 2, 1, 2]), // dropped 1, relabeled 2313
                word(&[1, 1, 2, 2]), // dropped 2
                word(&[1, 2, 1, 2]), // dropped 3
            ]
        );
    }

    #[test]
    fn test_subword_branch_plus_free_letter_branches() {
        // 122331: loops 22 and 33, free letter 1
        let outcome = step(&word(&[1, 2, 2, 3, 3, 1]));
        let StepOutcome::Branches(branches) = outcome else {
            panic!("expected branches");
        };
        assert_eq!(
            branches,
            vec![
                word(&[1, 1]),       // branch 0: loops removed
                word(&[1, 1, 2, 2]), // free letter 1 removed
            ]
        );
    }

    #[test]
    fn test_branches_shrink_by_even_amounts() {
        for w in [
            word(&[1, 2, 1, 3, 2, 3]),
            word(&[1, 2, 2, 3, 3, 1]),
            word(&[1, 3, 4, 4, 3, 2, 1, 2]),
        ] {
            if let StepOutcome::Branches(branches) = step(&w) {
                for branch in branches {
                    assert!(branch.len() < w.len(), "{branch} not smaller than {w}");
                    let shrink = w.len() - branch.len();
                    assert!(shrink >= 2 && shrink % 2 == 0, "shrink of {shrink} from {w}");
                }
            }
        }
    }
}
