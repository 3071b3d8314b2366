//! Property-based tests for the reduction process.
//!
//! Random double occurrence words are built by shuffling a multiset of
//! letter pairs, which covers shapes the hand-picked scenarios miss.

use libnesting::prelude::*;
use libnesting::reduction::step;
use proptest::prelude::*;

/// A shuffled DOW of 1..=max_pairs letter pairs.
fn dow_strategy(max_pairs: u16) -> impl Strategy<Value = Word> {
    (1..=max_pairs).prop_flat_map(|pairs| {
        let letters: Vec<Letter> = (1..=pairs).flat_map(|letter| [letter, letter]).collect();
        Just(letters)
            .prop_shuffle()
            .prop_map(Word::from_letters)
    })
}

proptest! {
    #[test]
    fn prop_shuffled_pairs_are_double_occurrence(word in dow_strategy(6)) {
        prop_assert!(word.is_double_occurrence());
    }

    #[test]
    fn prop_nesting_index_positive_and_bounded(word in dow_strategy(6)) {
        let index = nesting_index(&word).unwrap();
        prop_assert!(index >= 1, "nonempty DOW {} got index {}", word, index);
        prop_assert!(
            index as usize <= word.len() / 2,
            "index {} of {} exceeds the depth bound",
            index,
            word
        );
    }

    #[test]
    fn prop_relabel_idempotent(word in dow_strategy(8)) {
        let once = word.relabel();
        prop_assert_eq!(once.relabel(), once);
    }

    #[test]
    fn prop_branches_shrink_evenly_and_stay_dows(word in dow_strategy(6)) {
        if let StepOutcome::Branches(branches) = step(&word) {
            for branch in branches {
                prop_assert!(branch.len() < word.len());
                let shrink = word.len() - branch.len();
                prop_assert!(shrink >= 2 && shrink % 2 == 0,
                    "branch {} shrinks {} by {}", branch, word, shrink);
                prop_assert!(branch.is_double_occurrence(),
                    "branch {} of {} is not a DOW", branch, word);
            }
        }
    }

    #[test]
    fn prop_isomorphism_class_structure(word in dow_strategy(4)) {
        let class = isomorphism_class(&word);
        prop_assert!(class.contains(&word.relabel()));
        prop_assert!(class.len() <= 2 * word.len());
        prop_assert!(class.len() >= 1);

        // members are distinct canonical DOWs with a defined index
        for member in &class {
            prop_assert_eq!(member, &member.relabel());
            prop_assert!(member.is_double_occurrence());
            prop_assert!(nesting_index(member).unwrap() >= 1);
        }
    }

    #[test]
    fn prop_isomorphism_class_is_closed(word in dow_strategy(4)) {
        // enumerating from any member reaches the same set of words
        let class = isomorphism_class(&word);
        let as_set = |words: &[Word]| {
            let mut sorted = words.to_vec();
            sorted.sort();
            sorted
        };
        let expected = as_set(&class);
        for member in &class {
            prop_assert_eq!(
                as_set(&isomorphism_class(member)),
                expected.clone(),
                "class of member {} diverged",
                member
            );
        }
    }

    #[test]
    fn prop_odd_truncation_is_rejected(word in dow_strategy(5)) {
        // dropping one position leaves a letter with a single occurrence
        let truncated = Word::from_letters(
            word.letters().iter().copied().skip(1)
        );
        prop_assert_eq!(
            nesting_index(&truncated),
            Err(NestingError::NotDoubleOccurrence)
        );
    }
}
