//! Feedback computation and its textual form
//!
//! A `FeedbackCode` holds one `Mark` per position. At the system boundary it is
//! written as five characters from `c` (correct), `w` (wrong spot) and
//! `u` (unused), in guess order.

use super::error::{Result, WordleError};
use super::word::{ALPHABET_LEN, WORD_LEN, Word, letter_index};
use std::fmt;
use std::str::FromStr;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter is in the answer at this position
    Correct,
    /// Letter is in the answer, but elsewhere
    WrongSpot,
    /// Letter is not in the answer (beyond occurrences already matched)
    Unused,
}

impl Mark {
    /// Canonical character for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'c',
            Self::WrongSpot => 'w',
            Self::Unused => 'u',
        }
    }

    /// Parse one canonical character (case-insensitive)
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'c' | 'C' => Some(Self::Correct),
            'w' | 'W' => Some(Self::WrongSpot),
            'u' | 'U' => Some(Self::Unused),
            _ => None,
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Unused => 0,
            Self::WrongSpot => 1,
            Self::Correct => 2,
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackCode([Mark; WORD_LEN]);

/// Number of distinct feedback codes (3^5)
pub const FEEDBACK_CODES: usize = 243;

impl FeedbackCode {
    /// Every position correct
    pub const ALL_CORRECT: Self = Self([Mark::Correct; WORD_LEN]);

    /// Build a code from explicit marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Feedback for playing `guess` when `answer` is hidden
    ///
    /// Exact matches are resolved before misplaced letters, so a letter that
    /// appears more often in the guess than in the answer is only credited as
    /// many times as the answer contains it.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{FeedbackCode, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("trace").unwrap();
    /// assert_eq!(FeedbackCode::calculate(&guess, &answer).to_string(), "wccuc");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Unused; WORD_LEN];
        let mut available: [u8; ALPHABET_LEN] = *answer.letter_counts();
        let guess_letters = guess.letters();
        let answer_letters = answer.letters();

        for (i, mark) in marks.iter_mut().enumerate() {
            if guess_letters[i] == answer_letters[i] {
                *mark = Mark::Correct;
                available[letter_index(guess_letters[i])] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            let slot = &mut available[letter_index(guess_letters[i])];
            if *slot > 0 {
                *mark = Mark::WrongSpot;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    /// Parse the `c/w/u` text form
    ///
    /// Surrounding whitespace is ignored and upper case is accepted.
    ///
    /// # Errors
    /// `InvalidFeedbackFormat` on wrong length or any other character.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::FeedbackCode;
    ///
    /// let code = FeedbackCode::parse("wccuc").unwrap();
    /// assert_eq!(code.to_string(), "wccuc");
    /// assert!(FeedbackCode::parse("ccccx").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let symbols: Vec<char> = trimmed.chars().collect();

        if symbols.len() != WORD_LEN {
            return Err(WordleError::InvalidFeedbackFormat {
                input: input.to_string(),
                reason: format!("expected {WORD_LEN} characters, got {}", symbols.len()),
            });
        }

        let mut marks = [Mark::Unused; WORD_LEN];
        for (mark, &symbol) in marks.iter_mut().zip(&symbols) {
            *mark = Mark::from_symbol(symbol).ok_or_else(|| WordleError::InvalidFeedbackFormat {
                input: input.to_string(),
                reason: format!("'{symbol}' is not one of c/w/u"),
            })?;
        }

        Ok(Self(marks))
    }

    /// The marks in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Dense index in `0..FEEDBACK_CODES`, first position least significant
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
            .iter()
            .rev()
            .fold(0usize, |acc, mark| acc * 3 + usize::from(mark.digit()))
    }

    /// Render as colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::WrongSpot => '🟨',
                Mark::Unused => '⬜',
            })
            .collect()
    }
}

impl FromStr for FeedbackCode {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|mark| write!(f, "{}", mark.symbol()))
    }
}

/// Feedback between two words
#[inline]
#[must_use]
pub fn compute_feedback(guess: &Word, answer: &Word) -> FeedbackCode {
    FeedbackCode::calculate(guess, answer)
}

/// Feedback between two unvalidated strings
///
/// # Errors
/// `WordLengthMismatch` or `InvalidCharacters` if either input is not a word;
/// nothing is compared in that case.
pub fn compute_feedback_str(guess: &str, answer: &str) -> Result<FeedbackCode> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(FeedbackCode::calculate(&guess, &answer))
}
