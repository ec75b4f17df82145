//! Wordle word representation
//!
//! A `Word` is five lowercase ASCII letters plus their occurrence counts, so
//! feedback and consistency checks never have to recount letters.

use super::error::{Result, WordleError};
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Size of the alphabet (`a..=z`)
pub const ALPHABET_LEN: usize = 26;

/// Index of a lowercase ASCII letter in `0..26`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// A five-letter word
///
/// Cheap to copy; equality and hashing only look at the letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LEN],
    counts: [u8; ALPHABET_LEN],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// - `WordLengthMismatch` if the input is not exactly five characters
    /// - `InvalidCharacters` if anything other than `a-z` is present
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let lowered = text.trim().to_lowercase();

        let actual = lowered.chars().count();
        if actual != WORD_LEN {
            return Err(WordleError::WordLengthMismatch {
                word: lowered,
                expected: WORD_LEN,
                actual,
            });
        }

        if !lowered.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordleError::InvalidCharacters(lowered));
        }

        let mut letters = [0u8; WORD_LEN];
        letters.copy_from_slice(lowered.as_bytes());
        let mut counts = [0u8; ALPHABET_LEN];
        for &letter in &letters {
            counts[letter_index(letter)] += 1;
        }
        Ok(Self { letters, counts })
    }

    /// The word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction guarantees ASCII
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// The letters as bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// How many times each letter occurs, indexed by `letter_index`
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; ALPHABET_LEN] {
        &self.counts
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("CrAnE").unwrap().text(), "crane");
        assert_eq!(Word::new("  slate\n").unwrap().text(), "slate");
    }

    #[test]
    fn word_creation_length_mismatch() {
        assert!(matches!(
            Word::new("toolong"),
            Err(WordleError::WordLengthMismatch { actual: 7, .. })
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordleError::WordLengthMismatch { actual: 4, .. })
        ));
        assert!(matches!(
            Word::new(""),
            Err(WordleError::WordLengthMismatch { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordleError::InvalidCharacters(_))
        ));
        assert!(Word::new("cr ne").is_err());
        assert!(Word::new("cran!").is_err());
        // Five characters but not five ASCII letters
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn letter_counts_handle_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b'e')], 2);
        assert_eq!(counts[letter_index(b's')], 1);
        assert_eq!(counts[letter_index(b'z')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), WORD_LEN);
    }

    #[test]
    fn counts_survive_case_folding() {
        let upper = Word::new("EERIE").unwrap();
        let lower = Word::new("eerie").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.letter_counts()[letter_index(b'e')], 3);
        assert_eq!(upper.letter_counts()[letter_index(b'a')], 0);
    }

    #[test]
    fn parses_via_from_str() {
        let word: Word = "trace".parse().unwrap();
        assert_eq!(word.letter_at(0), b't');
        assert_eq!(format!("{word}"), "trace");
    }
}
