//! Wordle solving
//!
//! `constraints` tracks what feedback has revealed, `selector` picks the guess
//! that minimizes the expected number of remaining candidates, and `session`
//! drives both through a single puzzle.

pub mod constraints;
pub mod selector;
pub mod session;

pub use constraints::{ConstraintSpace, Knowledge};
pub use selector::{
    CancelToken, GuessMetrics, GuessSelector, ScoredGuess, TieBreak, choose_guess, metrics, score,
};
pub use session::{Session, SessionState, Turn};
