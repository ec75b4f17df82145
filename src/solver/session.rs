//! One puzzle from first guess to a terminal state
//!
//! ```text
//! Init -> AwaitingGuess -> AwaitingFeedback -> AwaitingGuess -> ...
//!                                           \-> Solved | Unsolvable
//! any non-terminal state --abort--> Aborted
//! ```

use super::constraints::ConstraintSpace;
use super::selector::GuessSelector;
use crate::core::{FeedbackCode, Result, Word, WordleError};
use log::{debug, info, warn};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Init,
    /// Ready for a guess; the selector may be asked for one
    AwaitingGuess,
    /// A guess was submitted and its feedback is pending
    AwaitingFeedback,
    Solved,
    /// The accumulated feedback rules out every candidate
    Unsolvable,
    Aborted,
}

impl SessionState {
    /// Check if no further input is accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Unsolvable | Self::Aborted)
    }
}

/// A played guess and what it did to the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: FeedbackCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Drives a `ConstraintSpace` through one puzzle
pub struct Session<'a> {
    pool: &'a [Word],
    selector: GuessSelector,
    space: ConstraintSpace<'a>,
    state: SessionState,
    pending: Option<Word>,
    solution: Option<Word>,
    history: Vec<Turn>,
    snapshots: Vec<ConstraintSpace<'a>>,
}

impl<'a> Session<'a> {
    /// Create a session guessing from `pool` with `answers` as candidates
    #[must_use]
    pub fn new(pool: &'a [Word], answers: &'a [Word], selector: GuessSelector) -> Self {
        Self {
            pool,
            selector,
            space: ConstraintSpace::new(answers),
            state: SessionState::Init,
            pending: None,
            solution: None,
            history: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    /// Leave `Init`
    ///
    /// A candidate set of one is solved immediately, an empty one is unsolvable.
    ///
    /// # Errors
    /// `UnexpectedInput` if the session was already started.
    pub fn start(&mut self) -> Result<SessionState> {
        if self.state != SessionState::Init {
            return Err(WordleError::UnexpectedInput("session already started"));
        }
        self.state = SessionState::AwaitingGuess;
        self.settle();
        debug!("session started with {} candidates", self.space.len());
        Ok(self.state)
    }

    /// Ask the selector for the next guess
    ///
    /// # Errors
    /// - `SessionFinished` / `UnexpectedInput` outside `AwaitingGuess`
    /// - `Aborted` if the selector was cancelled; the session becomes `Aborted`
    pub fn suggest(&mut self) -> Result<Option<&'a Word>> {
        self.expect_state(SessionState::AwaitingGuess, "no guess is expected now")?;
        match self.selector.choose(self.pool, &self.space) {
            Err(WordleError::Aborted) => {
                self.abort();
                Err(WordleError::Aborted)
            }
            other => other,
        }
    }

    /// Play `guess`; feedback for it must follow
    ///
    /// # Errors
    /// `SessionFinished` / `UnexpectedInput` outside `AwaitingGuess`.
    pub fn submit_guess(&mut self, guess: Word) -> Result<()> {
        self.expect_state(SessionState::AwaitingGuess, "feedback is still pending")?;
        self.pending = Some(guess);
        self.state = SessionState::AwaitingFeedback;
        Ok(())
    }

    /// Feedback for the pending guess
    ///
    /// Contradictory feedback is rejected and the session stays in
    /// `AwaitingFeedback`, so the caller can ask for a correction.
    ///
    /// # Errors
    /// - `SessionFinished` / `UnexpectedInput` outside `AwaitingFeedback`
    /// - `ContradictoryFeedback`, with nothing changed
    pub fn submit_feedback(&mut self, feedback: FeedbackCode) -> Result<SessionState> {
        self.expect_state(SessionState::AwaitingFeedback, "no guess is pending")?;
        let guess = self
            .pending
            .ok_or(WordleError::UnexpectedInput("no guess is pending"))?;

        let snapshot = self.space.clone();
        let candidates_before = self.space.len();
        if let Err(e) = self.space.record_feedback(&guess, feedback) {
            warn!("rejected feedback {feedback} for {guess}: {e}");
            return Err(e);
        }
        let candidates_after = self.space.refilter();

        self.snapshots.push(snapshot);
        self.history.push(Turn {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });
        self.pending = None;

        if feedback.is_solved() {
            self.state = SessionState::Solved;
            self.solution = Some(guess);
            info!("solved: {guess} in {} guesses", self.history.len());
        } else {
            self.state = SessionState::AwaitingGuess;
            self.settle();
        }
        Ok(self.state)
    }

    /// Parse `c/w/u` text and submit it
    ///
    /// # Errors
    /// `InvalidFeedbackFormat` before anything is touched, otherwise as
    /// [`submit_feedback`](Self::submit_feedback).
    pub fn submit_feedback_str(&mut self, feedback: &str) -> Result<SessionState> {
        let feedback = FeedbackCode::parse(feedback)?;
        self.submit_feedback(feedback)
    }

    /// Cancel from outside; terminal states are left alone
    pub fn abort(&mut self) {
        if !self.state.is_terminal() {
            info!("session aborted after {} guesses", self.history.len());
            self.state = SessionState::Aborted;
            self.pending = None;
        }
    }

    /// Take back the last feedback, or a pending guess
    ///
    /// Returns `false` if there was nothing to undo. Aborted sessions stay
    /// aborted.
    pub fn undo(&mut self) -> bool {
        if self.state == SessionState::Aborted {
            return false;
        }
        if self.state == SessionState::AwaitingFeedback {
            self.pending = None;
            self.state = SessionState::AwaitingGuess;
            return true;
        }
        match self.snapshots.pop() {
            Some(snapshot) => {
                self.space = snapshot;
                self.history.pop();
                self.solution = None;
                self.state = SessionState::AwaitingGuess;
                debug!("undo: back to {} candidates", self.space.len());
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The answer, once solved
    #[must_use]
    pub const fn solution(&self) -> Option<Word> {
        self.solution
    }

    /// The guess waiting for feedback
    #[must_use]
    pub const fn pending(&self) -> Option<Word> {
        self.pending
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn space(&self) -> &ConstraintSpace<'a> {
        &self.space
    }

    // Move to a terminal state if the candidate count decides the puzzle
    fn settle(&mut self) {
        match self.space.candidates() {
            [] => {
                self.state = SessionState::Unsolvable;
                warn!("no candidates left after {} guesses", self.history.len());
            }
            [only] => {
                self.state = SessionState::Solved;
                self.solution = Some(**only);
                info!("solved: only {only} remains after {} guesses", self.history.len());
            }
            _ => {}
        }
    }

    fn expect_state(&self, expected: SessionState, message: &'static str) -> Result<()> {
        if self.state.is_terminal() {
            Err(WordleError::SessionFinished)
        } else if self.state == expected {
            Ok(())
        } else {
            Err(WordleError::UnexpectedInput(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute_feedback;
    use crate::solver::selector::{CancelToken, TieBreak};
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn five() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "trace", "grape", "place"])
    }

    #[test]
    fn solves_trace_from_crane() {
        let words = five();
        let mut session = Session::new(&words, &words, GuessSelector::new());
        assert_eq!(session.state(), SessionState::Init);
        assert_eq!(session.start().unwrap(), SessionState::AwaitingGuess);

        let guess = *session.suggest().unwrap().unwrap();
        assert_eq!(guess.text(), "crane");
        session.submit_guess(guess).unwrap();
        assert_eq!(session.state(), SessionState::AwaitingFeedback);

        let state = session.submit_feedback_str("wccuc").unwrap();
        assert_eq!(state, SessionState::Solved);
        assert_eq!(session.solution().unwrap().text(), "trace");

        let turn = session.history()[0];
        assert_eq!(turn.candidates_before, 5);
        assert_eq!(turn.candidates_after, 1);
    }

    #[test]
    fn all_correct_feedback_solves() {
        let words = five();
        let mut session = Session::new(&words, &words, GuessSelector::new());
        session.start().unwrap();
        session.submit_guess(word("slate")).unwrap();

        assert_eq!(
            session.submit_feedback(FeedbackCode::ALL_CORRECT).unwrap(),
            SessionState::Solved
        );
        assert_eq!(session.solution(), Some(word("slate")));
        assert_eq!(session.submit_guess(word("crane")), Err(WordleError::SessionFinished));
    }

    #[test]
    fn malformed_feedback_changes_nothing() {
        let words = five();
        let mut session = Session::new(&words, &words, GuessSelector::new());
        session.start().unwrap();
        session.submit_guess(word("crane")).unwrap();

        let before = *session.space().knowledge();
        let result = session.submit_feedback_str("ccccx");

        assert!(matches!(result, Err(WordleError::InvalidFeedbackFormat { .. })));
        assert_eq!(session.state(), SessionState::AwaitingFeedback);
        assert_eq!(*session.space().knowledge(), before);
        assert_eq!(session.space().len(), 5);
        assert!(session.history().is_empty());
    }

    #[test]
    fn contradictory_feedback_can_be_corrected() {
        let words = five();
        let mut session = Session::new(&words, &words, GuessSelector::new());
        session.start().unwrap();

        // Every candidate has A in the middle, so nothing is ruled out yet
        session.submit_guess(word("xxaxx")).unwrap();
        session.submit_feedback_str("uucuu").unwrap();
        assert_eq!(session.state(), SessionState::AwaitingGuess);
        assert_eq!(session.space().len(), 5);

        session.submit_guess(word("slate")).unwrap();
        let result = session.submit_feedback_str("uuuuc");
        assert!(matches!(result, Err(WordleError::ContradictoryFeedback(_))));
        assert_eq!(session.state(), SessionState::AwaitingFeedback);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.space().len(), 5);

        assert_eq!(session.submit_feedback_str("uccuc").unwrap(), SessionState::Solved);
        assert_eq!(session.solution().unwrap().text(), "place");
    }

    #[test]
    fn feedback_ruling_out_everything_is_unsolvable() {
        let words = five();
        let mut session = Session::new(&words, &words, GuessSelector::new());
        session.start().unwrap();
        session.submit_guess(word("zzzzz")).unwrap();
        session.submit_feedback_str("wuuuu").unwrap();

        assert_eq!(session.state(), SessionState::Unsolvable);
        assert!(session.state().is_terminal());
        assert_eq!(session.suggest(), Err(WordleError::SessionFinished));
    }

    #[test]
    fn undo_restores_previous_candidates() {
        let words = five();
        let mut session = Session::new(&words, &words, GuessSelector::new());
        session.start().unwrap();
        session.submit_guess(word("zzzzz")).unwrap();
        session.submit_feedback_str("wuuuu").unwrap();
        assert_eq!(session.state(), SessionState::Unsolvable);

        assert!(session.undo());
        assert_eq!(session.state(), SessionState::AwaitingGuess);
        assert_eq!(session.space().len(), 5);
        assert!(session.history().is_empty());
        assert!(!session.undo());
    }

    #[test]
    fn undo_drops_pending_guess() {
        let words = five();
        let mut session = Session::new(&words, &words, GuessSelector::new());
        session.start().unwrap();
        session.submit_guess(word("crane")).unwrap();

        assert!(session.undo());
        assert_eq!(session.pending(), None);
        assert_eq!(session.state(), SessionState::AwaitingGuess);
    }

    #[test]
    fn phases_are_enforced() {
        let words = five();
        let mut session = Session::new(&words, &words, GuessSelector::new());
        assert!(matches!(
            session.submit_guess(word("crane")),
            Err(WordleError::UnexpectedInput(_))
        ));

        session.start().unwrap();
        assert!(matches!(session.start(), Err(WordleError::UnexpectedInput(_))));
        assert!(matches!(
            session.submit_feedback(FeedbackCode::ALL_CORRECT),
            Err(WordleError::UnexpectedInput(_))
        ));

        session.submit_guess(word("crane")).unwrap();
        assert!(matches!(
            session.submit_guess(word("slate")),
            Err(WordleError::UnexpectedInput(_))
        ));
        assert!(matches!(session.suggest(), Err(WordleError::UnexpectedInput(_))));
    }

    #[test]
    fn single_candidate_is_solved_on_start() {
        let answers = words_from_slice(&["trace"]);
        let pool = five();
        let mut session = Session::new(&pool, &answers, GuessSelector::new());
        assert_eq!(session.start().unwrap(), SessionState::Solved);
        assert_eq!(session.solution(), Some(word("trace")));
    }

    #[test]
    fn abort_is_terminal() {
        let words = five();
        let mut session = Session::new(&words, &words, GuessSelector::new());
        session.start().unwrap();
        session.abort();

        assert_eq!(session.state(), SessionState::Aborted);
        assert!(!session.undo());
        assert_eq!(session.suggest(), Err(WordleError::SessionFinished));
    }

    #[test]
    fn cancelled_selector_aborts_session() {
        let words = five();
        let cancel = CancelToken::new();
        let selector = GuessSelector::new().with_cancel(cancel.clone());
        let mut session = Session::new(&words, &words, selector);
        session.start().unwrap();

        cancel.cancel();
        assert_eq!(session.suggest(), Err(WordleError::Aborted));
        assert_eq!(session.state(), SessionState::Aborted);
    }

    #[test]
    fn guess_sequence_is_reproducible() {
        let words = five();
        let answer = word("grape");

        let play = |tie_break| {
            let selector = GuessSelector::new().with_tie_break(tie_break);
            let mut session = Session::new(&words, &words, selector);
            session.start().unwrap();
            let mut guesses = Vec::new();
            while session.state() == SessionState::AwaitingGuess {
                let guess = *session.suggest().unwrap().unwrap();
                guesses.push(guess);
                session.submit_guess(guess).unwrap();
                session
                    .submit_feedback(compute_feedback(&guess, &answer))
                    .unwrap();
            }
            (guesses, session.solution())
        };

        let first = play(TieBreak::PoolOrder);
        assert_eq!(first, play(TieBreak::PoolOrder));
        assert_eq!(first.1, Some(answer));
        assert!(first.0.len() <= 3);
    }
}
