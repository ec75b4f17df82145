//! Core domain types for Wordle
//!
//! Words, feedback codes and the error type. Nothing here holds state between
//! calls; the solver layers build on these values.

mod error;
mod feedback;
mod word;

pub use error::{Result, WordleError};
pub use feedback::{
    FEEDBACK_CODES, FeedbackCode, Mark, compute_feedback, compute_feedback_str,
};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, letter_index};
