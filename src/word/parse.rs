//! Word parsing.
//!
//! Input words arrive either as a compact digit string (`"121323"`, one
//! letter per digit) or, for alphabets past 9, as a punctuation-delimited
//! list of multi-digit letters (`"1,12,1,12"`). The presence of any ASCII
//! punctuation character selects the delimited form; everything else must be
//! a digit. Malformed input is rejected before a word is constructed.

use super::{Letter, LetterSeq, Word};
use thiserror::Error;

/// Rejection cases for [`Word::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contains a character that is neither a digit nor a
    /// recognized delimiter.
    #[error("unrecognized character {character:?} at position {position}")]
    MalformedToken {
        /// The offending character.
        character: char,
        /// Its byte offset in the input.
        position: usize,
    },

    /// A delimited letter is too large for a 16-bit token.
    #[error("letter {text:?} does not fit in 16 bits")]
    LetterOverflow {
        /// The offending letter text.
        text: String,
    },
}

pub(super) fn parse_word(text: &str) -> Result<Word, ParseError> {
    for (position, character) in text.char_indices() {
        if !character.is_ascii_digit() && !character.is_ascii_punctuation() {
            return Err(ParseError::MalformedToken { character, position });
        }
    }

    let letters = if text.contains(|c: char| c.is_ascii_punctuation()) {
        parse_delimited(text)?
    } else {
        text.bytes().map(|b| Letter::from(b - b'0')).collect()
    };
    Ok(Word { letters })
}

/// Delimited form: any run of punctuation separates letters, so `"1,,2"` and
/// `"1,2"` read the same. Letters may be multi-digit.
fn parse_delimited(text: &str) -> Result<LetterSeq, ParseError> {
    let mut letters = LetterSeq::new();
    for token in text.split(|c: char| c.is_ascii_punctuation()) {
        if token.is_empty() {
            continue;
        }
        let letter = token.parse::<Letter>().map_err(|_| ParseError::LetterOverflow {
            text: token.to_string(),
        })?;
        letters.push(letter);
    }
    Ok(letters)
}
