//! Word solving command
//!
//! Plays a full puzzle against a known answer and records every step.

use crate::core::{FeedbackCode, Result, Word, WordleError, compute_feedback};
use crate::solver::{GuessSelector, Session, SessionState, score};
use log::info;
use rand::seq::IndexedRandom;

/// Turns allowed by the game
pub const MAX_TURNS: usize = 6;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub max_turns: usize,
    /// Forced first guess; the selector chooses when `None`
    pub start: Option<Word>,
    /// Pick each guess from the candidates still consistent instead of the pool
    pub from_candidates: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_turns: MAX_TURNS,
            start: None,
            from_candidates: false,
        }
    }

    #[must_use]
    pub const fn with_start(mut self, start: Word) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub const fn with_from_candidates(mut self, from_candidates: bool) -> Self {
        self.from_candidates = from_candidates;
        self
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub success: bool,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    /// The guessed words in order
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        self.guesses.iter().map(|step| step.word).collect()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone, Copy)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: FeedbackCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Score of the guess when it was played, if more than one candidate remained
    pub expected_remaining: Option<f64>,
}

/// Pick a random answer to solve
#[must_use]
pub fn random_target(answers: &[Word]) -> Option<Word> {
    answers.choose(&mut rand::rng()).copied()
}

/// Solve `config.target`, guessing from `pool` with `answers` as candidates
///
/// Once a single candidate remains it is played as the final guess, unless it
/// was the guess just played. With `from_candidates` every guess after a forced
/// start is chosen among the candidates still consistent at that turn.
///
/// # Errors
///
/// - `WordLengthMismatch` / `InvalidCharacters` for a malformed target
/// - `UnknownWord` if the target is not among `answers`
/// - `Aborted` if the selector was cancelled
pub fn solve_word(
    config: &SolveConfig,
    selector: &GuessSelector,
    pool: &[Word],
    answers: &[Word],
) -> Result<SolveResult> {
    let target = Word::new(&config.target)?;
    if !answers.contains(&target) {
        return Err(WordleError::UnknownWord(target.to_string()));
    }

    let mut session = Session::new(pool, answers, selector.clone());
    session.start()?;
    let mut guesses: Vec<GuessStep> = Vec::new();

    while session.state() == SessionState::AwaitingGuess && guesses.len() < config.max_turns {
        let guess = match (guesses.is_empty(), config.start) {
            (true, Some(start)) => Some(start),
            _ if config.from_candidates => {
                let remaining: Vec<Word> =
                    session.space().candidates().iter().map(|&w| *w).collect();
                selector.choose(&remaining, session.space())?.copied()
            }
            _ => session.suggest()?.copied(),
        };
        let Some(guess) = guess else {
            break;
        };

        let candidates_before = session.space().len();
        let expected_remaining = (candidates_before > 1).then(|| score(&guess, session.space()));
        let feedback = compute_feedback(&guess, &target);

        session.submit_guess(guess)?;
        session.submit_feedback(feedback)?;

        guesses.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after: session.space().len(),
            expected_remaining,
        });
    }

    if let Some(solution) = session.solution()
        && guesses.last().is_none_or(|step| step.word != solution)
        && guesses.len() < config.max_turns
    {
        guesses.push(GuessStep {
            word: solution,
            feedback: FeedbackCode::ALL_CORRECT,
            candidates_before: 1,
            candidates_after: 1,
            expected_remaining: None,
        });
    }

    let success = guesses.last().is_some_and(|step| step.feedback.is_solved());
    info!(
        "{target}: {} in {} guesses",
        if success { "solved" } else { "not solved" },
        guesses.len()
    );

    Ok(SolveResult {
        target,
        success,
        guesses,
    })
}
