//! Guess selection by expected remaining candidates
//!
//! A guess is scored by playing it against every remaining candidate as if that
//! candidate were the answer, filtering with the resulting feedback, and
//! averaging how many candidates survive. Lower is better.

use super::constraints::ConstraintSpace;
use crate::core::{FEEDBACK_CODES, FeedbackCode, Result, Word, WordleError, compute_feedback};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// Shared flag for cancelling a selection from another thread
///
/// Checked between guesses, never in the middle of scoring one.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

/// How to choose among guesses with the same score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Earliest position in the guess pool
    #[default]
    PoolOrder,
    /// Words that could still be the answer first, then pool order
    PreferCandidates,
}

impl TieBreak {
    /// Create from a name: "pool-order" or "prefer-candidates"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pool-order" | "pool" => Some(Self::PoolOrder),
            "prefer-candidates" | "candidates" => Some(Self::PreferCandidates),
            _ => None,
        }
    }
}

/// A guess together with its score
#[derive(Debug, Clone, Copy)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    /// Expected number of remaining candidates
    pub score: f64,
    /// Position in the guess pool
    pub pool_index: usize,
    /// Whether the word is itself still a candidate
    pub is_candidate: bool,
    /// Sum of remaining counts over all hypothetical answers (`score * n`)
    total: usize,
}

/// Detailed evaluation of one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Expected number of remaining candidates
    pub expected_remaining: f64,
    /// Number of distinct feedback codes the guess can produce
    pub partitions: usize,
    /// Largest number of candidates any single feedback leaves
    pub worst_case: usize,
}

/// Candidate counts surviving each distinct feedback, with group sizes
///
/// Returns `(group_size, remaining)` pairs. A feedback that contradicts what is
/// already known leaves nothing, which only happens when the space was not
/// refiltered after its last observation.
fn partition(guess: &Word, space: &ConstraintSpace) -> Vec<(usize, usize)> {
    let mut sizes = [0usize; FEEDBACK_CODES];
    let mut seen: Vec<FeedbackCode> = Vec::new();
    for &answer in space.candidates() {
        let feedback = compute_feedback(guess, answer);
        let size = &mut sizes[feedback.index()];
        if *size == 0 {
            seen.push(feedback);
        }
        *size += 1;
    }

    seen.into_iter()
        .map(|feedback| {
            let remaining = space
                .knowledge()
                .absorb(guess, feedback)
                .map_or(0, |knowledge| space.count_consistent(&knowledge));
            (sizes[feedback.index()], remaining)
        })
        .collect()
}

/// Sum of remaining counts over every candidate answer
fn total_remaining(guess: &Word, space: &ConstraintSpace) -> usize {
    partition(guess, space)
        .into_iter()
        .map(|(size, remaining)| size * remaining)
        .sum()
}

/// Expected number of candidates left after playing `guess`
///
/// Candidates are grouped by the feedback they would produce; each group is
/// filtered once and weighted by its size. Returns 0.0 for an empty space.
///
/// # Examples
/// ```
/// use wordle_constraints::core::Word;
/// use wordle_constraints::solver::{ConstraintSpace, score};
/// use wordle_constraints::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "trace", "grape", "place"]);
/// let space = ConstraintSpace::new(&words);
///
/// let crane = Word::new("crane").unwrap();
/// let slate = Word::new("slate").unwrap();
/// assert!((score(&crane, &space) - 1.0).abs() < 1e-9);
/// assert!((score(&slate, &space) - 1.4).abs() < 1e-9);
/// ```
#[must_use]
pub fn score(guess: &Word, space: &ConstraintSpace) -> f64 {
    if space.is_empty() {
        return 0.0;
    }
    total_remaining(guess, space) as f64 / space.len() as f64
}

/// Per-answer version of [`score`]
///
/// Clones the whole space for every candidate answer. Produces the same value
/// as [`score`] and is kept as a reference for it.
#[must_use]
pub fn score_naive(guess: &Word, space: &ConstraintSpace) -> f64 {
    if space.is_empty() {
        return 0.0;
    }

    let total: usize = space
        .candidates()
        .iter()
        .map(|&answer| {
            let mut hypothetical = space.clone();
            match hypothetical.record_feedback(guess, compute_feedback(guess, answer)) {
                Ok(()) => hypothetical.refilter(),
                Err(_) => 0,
            }
        })
        .sum();

    total as f64 / space.len() as f64
}

/// Expected, worst-case and partition count for a guess
#[must_use]
pub fn metrics(guess: &Word, space: &ConstraintSpace) -> GuessMetrics {
    if space.is_empty() {
        return GuessMetrics {
            expected_remaining: 0.0,
            partitions: 0,
            worst_case: 0,
        };
    }

    let groups = partition(guess, space);
    let total: usize = groups.iter().map(|&(size, remaining)| size * remaining).sum();

    GuessMetrics {
        expected_remaining: total as f64 / space.len() as f64,
        partitions: groups.len(),
        worst_case: groups.iter().map(|&(_, remaining)| remaining).max().unwrap_or(0),
    }
}

/// Pick the next guess with default settings
///
/// Returns the sole candidate without scoring anything when only one remains.
/// Otherwise the lowest-scoring pool word wins, ties going to the earliest
/// position in `pool`. `None` if the pool or the space is empty.
#[must_use]
pub fn choose_guess<'a>(pool: &'a [Word], space: &ConstraintSpace<'a>) -> Option<&'a Word> {
    GuessSelector::default().choose(pool, space).ok().flatten()
}

/// Configurable guess selection
#[derive(Debug, Clone, Default)]
pub struct GuessSelector {
    tie_break: TieBreak,
    parallel: bool,
    cancel: Option<CancelToken>,
}

impl GuessSelector {
    /// Sequential selector with pool-order tie-breaking
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Score the pool on the rayon thread pool
    ///
    /// The chosen guess is the same as with sequential scoring.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Pick the next guess
    ///
    /// # Errors
    /// `Aborted` if the cancel token fires while scoring.
    pub fn choose<'a>(
        &self,
        pool: &'a [Word],
        space: &ConstraintSpace<'a>,
    ) -> Result<Option<&'a Word>> {
        match space.candidates() {
            [] => return Ok(None),
            [only] => return Ok(Some(*only)),
            _ => {}
        }

        let scored = self.evaluate(pool, space)?;
        Ok(scored
            .into_iter()
            .min_by(|a, b| self.compare(a, b))
            .map(|best| best.word))
    }

    /// The best `top` guesses, best first
    ///
    /// # Errors
    /// `Aborted` if the cancel token fires while scoring.
    pub fn rank<'a>(
        &self,
        pool: &'a [Word],
        space: &ConstraintSpace<'a>,
        top: usize,
    ) -> Result<Vec<ScoredGuess<'a>>> {
        let mut scored = self.evaluate(pool, space)?;
        scored.sort_by(|a, b| self.compare(a, b));
        scored.truncate(top);
        Ok(scored)
    }

    fn evaluate<'a>(
        &self,
        pool: &'a [Word],
        space: &ConstraintSpace<'a>,
    ) -> Result<Vec<ScoredGuess<'a>>> {
        let candidates: FxHashSet<&Word> = space.candidates().iter().copied().collect();
        let n = space.len().max(1) as f64;

        let score_one = |(pool_index, word): (usize, &'a Word)| {
            if self.is_cancelled() {
                return Err(WordleError::Aborted);
            }
            let total = total_remaining(word, space);
            Ok(ScoredGuess {
                word,
                score: total as f64 / n,
                pool_index,
                is_candidate: candidates.contains(word),
                total,
            })
        };

        if self.parallel {
            pool.par_iter().enumerate().map(score_one).collect()
        } else {
            pool.iter().enumerate().map(score_one).collect()
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    // Integer totals share the denominator, so equal scores compare exactly
    fn compare(&self, a: &ScoredGuess, b: &ScoredGuess) -> Ordering {
        a.total.cmp(&b.total).then_with(|| {
            let preference = match self.tie_break {
                TieBreak::PoolOrder => Ordering::Equal,
                TieBreak::PreferCandidates => b.is_candidate.cmp(&a.is_candidate),
            };
            preference.then(a.pool_index.cmp(&b.pool_index))
        })
    }
}
