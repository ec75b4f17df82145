//! Constraint accumulation and candidate filtering
//!
//! `Knowledge` is everything learned from feedback so far, stored in fixed-size
//! arrays so a hypothetical copy costs the same no matter how many guesses were
//! played. `ConstraintSpace` pairs it with the candidates that still agree.

use crate::core::{
    ALPHABET_LEN, FeedbackCode, Mark, Result, WORD_LEN, Word, WordleError, letter_index,
};
use log::debug;

#[inline]
const fn letter_bit(letter: u8) -> u32 {
    1 << letter_index(letter)
}

/// Facts derived from feedback
///
/// Bounds only ever tighten: lower bounds take the maximum seen, upper bounds
/// the minimum seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Knowledge {
    correct: [Option<u8>; WORD_LEN],
    excluded: [u32; WORD_LEN],
    min_count: [u8; ALPHABET_LEN],
    max_count: [u8; ALPHABET_LEN],
}

impl Default for Knowledge {
    fn default() -> Self {
        Self {
            correct: [None; WORD_LEN],
            excluded: [0; WORD_LEN],
            min_count: [0; ALPHABET_LEN],
            max_count: [WORD_LEN as u8; ALPHABET_LEN],
        }
    }
}

impl Knowledge {
    /// Knowledge after also observing `feedback` for `guess`
    ///
    /// `self` is left untouched, so a failed observation never leaves partial
    /// state behind.
    ///
    /// # Errors
    /// `ContradictoryFeedback` if a fixed position would change, a position would
    /// be both fixed to and excluded from a letter, or a letter's bounds cross.
    pub fn absorb(&self, guess: &Word, feedback: FeedbackCode) -> Result<Self> {
        let mut next = *self;
        let mut observed = [0u8; ALPHABET_LEN];
        let mut unused = [false; ALPHABET_LEN];

        for (i, (&letter, &mark)) in guess
            .letters()
            .iter()
            .zip(feedback.marks())
            .enumerate()
        {
            let idx = letter_index(letter);
            match mark {
                Mark::Correct => {
                    if let Some(fixed) = next.correct[i]
                        && fixed != letter
                    {
                        return Err(WordleError::ContradictoryFeedback(format!(
                            "position {} is already '{}', not '{}'",
                            i + 1,
                            fixed as char,
                            letter as char
                        )));
                    }
                    next.correct[i] = Some(letter);
                    observed[idx] += 1;
                }
                Mark::WrongSpot => {
                    next.excluded[i] |= letter_bit(letter);
                    observed[idx] += 1;
                }
                Mark::Unused => {
                    next.excluded[i] |= letter_bit(letter);
                    unused[idx] = true;
                }
            }
        }

        for idx in 0..ALPHABET_LEN {
            next.min_count[idx] = next.min_count[idx].max(observed[idx]);
            // An unused copy means every copy of the letter was already credited
            if unused[idx] {
                next.max_count[idx] = next.max_count[idx].min(observed[idx]);
            }
            if next.min_count[idx] > next.max_count[idx] {
                return Err(WordleError::ContradictoryFeedback(format!(
                    "'{}' must appear at least {} and at most {} times",
                    (b'a' + idx as u8) as char,
                    next.min_count[idx],
                    next.max_count[idx]
                )));
            }
        }

        let required: usize = next.min_count.iter().map(|&n| usize::from(n)).sum();
        if required > WORD_LEN {
            return Err(WordleError::ContradictoryFeedback(format!(
                "{required} letters are required in a {WORD_LEN}-letter word"
            )));
        }

        for (i, fixed) in next.correct.iter().enumerate() {
            if let Some(letter) = *fixed
                && next.excluded[i] & letter_bit(letter) != 0
            {
                return Err(WordleError::ContradictoryFeedback(format!(
                    "'{}' is both fixed at and excluded from position {}",
                    letter as char,
                    i + 1
                )));
            }
        }

        Ok(next)
    }

    /// Check `word` against every known fact
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        let letters = word.letters();

        for i in 0..WORD_LEN {
            if let Some(fixed) = self.correct[i]
                && letters[i] != fixed
            {
                return false;
            }
            if self.excluded[i] & letter_bit(letters[i]) != 0 {
                return false;
            }
        }

        let counts = word.letter_counts();
        counts
            .iter()
            .zip(self.min_count.iter().zip(&self.max_count))
            .all(|(&count, (&min, &max))| count >= min && count <= max)
    }

    /// Letter fixed at `position`, if known
    #[must_use]
    pub const fn correct_at(&self, position: usize) -> Option<u8> {
        self.correct[position]
    }

    /// Check if `letter` is known not to be at `position`
    ///
    /// `letter` must be in `b'a'..=b'z'`.
    #[must_use]
    pub const fn is_excluded(&self, position: usize, letter: u8) -> bool {
        self.excluded[position] & letter_bit(letter) != 0
    }

    /// Lower bound on occurrences of `letter`
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'a'..=b'z'`
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_count[letter_index(letter)]
    }

    /// Upper bound on occurrences of `letter` (`WORD_LEN` while unknown)
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'a'..=b'z'`
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> u8 {
        self.max_count[letter_index(letter)]
    }
}

/// Accumulated knowledge plus the candidates still consistent with it
///
/// Candidates are borrowed from a word list the caller owns, so independent
/// spaces over the same list never share mutable state.
#[derive(Debug, Clone)]
pub struct ConstraintSpace<'a> {
    knowledge: Knowledge,
    candidates: Vec<&'a Word>,
    observations: usize,
}

impl<'a> ConstraintSpace<'a> {
    /// Start a puzzle over `candidates` with nothing known
    #[must_use]
    pub fn new(candidates: &'a [Word]) -> Self {
        Self::from_refs(candidates.iter().collect())
    }

    /// Start a puzzle over an already collected candidate list
    #[must_use]
    pub fn from_refs(candidates: Vec<&'a Word>) -> Self {
        Self {
            knowledge: Knowledge::default(),
            candidates,
            observations: 0,
        }
    }

    /// Absorb one observation without refiltering
    ///
    /// Call [`refilter`](Self::refilter) afterwards.
    ///
    /// # Errors
    /// `ContradictoryFeedback`, leaving the space unchanged.
    pub fn record_feedback(&mut self, guess: &Word, feedback: FeedbackCode) -> Result<()> {
        self.knowledge = self.knowledge.absorb(guess, feedback)?;
        self.observations += 1;
        debug!("recorded {guess} -> {feedback} ({} observations)", self.observations);
        Ok(())
    }

    /// Check a word against everything observed so far
    #[inline]
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        self.knowledge.is_consistent(word)
    }

    /// Drop candidates that no longer fit, keeping order
    ///
    /// Returns the new number of candidates.
    pub fn refilter(&mut self) -> usize {
        let before = self.candidates.len();
        let knowledge = self.knowledge;
        self.candidates.retain(|word| knowledge.is_consistent(word));
        debug!("refilter: {before} -> {} candidates", self.candidates.len());
        self.candidates.len()
    }

    /// Record and refilter in one step
    ///
    /// # Errors
    /// - `ContradictoryFeedback` if the observation conflicts (space unchanged)
    /// - `Unsolvable` if no candidate survives (the space keeps the observation)
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{FeedbackCode, Word};
    /// use wordle_constraints::solver::ConstraintSpace;
    /// use wordle_constraints::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["crane", "slate", "trace", "grape", "place"]);
    /// let mut space = ConstraintSpace::new(&words);
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let remaining = space.apply(&guess, FeedbackCode::parse("wccuc").unwrap()).unwrap();
    /// assert_eq!(remaining, 1);
    /// assert_eq!(space.candidates()[0].text(), "trace");
    /// ```
    pub fn apply(&mut self, guess: &Word, feedback: FeedbackCode) -> Result<usize> {
        self.record_feedback(guess, feedback)?;
        match self.refilter() {
            0 => Err(WordleError::Unsolvable),
            remaining => Ok(remaining),
        }
    }

    /// How many current candidates satisfy `knowledge`
    ///
    /// Used to evaluate a hypothetical observation without copying candidates.
    #[must_use]
    pub fn count_consistent(&self, knowledge: &Knowledge) -> usize {
        self.candidates
            .iter()
            .filter(|word| knowledge.is_consistent(word))
            .count()
    }

    /// Current candidates in their original order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Check if `word` is still a candidate
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.candidates.iter().any(|&c| c == word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Everything learned so far
    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Number of observations absorbed
    #[inline]
    #[must_use]
    pub const fn observations(&self) -> usize {
        self.observations
    }
}
