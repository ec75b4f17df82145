//! Error kinds shared by the oracle, the constraint space and sessions
//!
//! Every variant is recoverable at the session level: the caller can report it
//! and ask for corrected input, or abandon the puzzle.

use thiserror::Error;

/// Everything that can go wrong while solving a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordleError {
    /// Feedback text of the wrong length or with a character outside `c/w/u`
    #[error("invalid feedback '{input}': {reason}")]
    InvalidFeedbackFormat { input: String, reason: String },

    /// A guess or answer that is not exactly five letters long
    #[error("'{word}' has {actual} letters, expected {expected}")]
    WordLengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    /// A word containing something other than the letters a-z
    #[error("'{0}' must contain only the letters a-z")]
    InvalidCharacters(String),

    /// A well-formed word missing from the list it was looked up in
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    /// Feedback that conflicts with what earlier observations established
    #[error("contradictory feedback: {0}")]
    ContradictoryFeedback(String),

    /// Refiltering left no candidate consistent with the accumulated feedback
    #[error("no candidate word is consistent with the feedback given")]
    Unsolvable,

    /// The selection was cancelled from outside
    #[error("guess selection was aborted")]
    Aborted,

    /// Input arrived after the session reached a terminal state
    #[error("the session is already finished")]
    SessionFinished,

    /// Input arrived in the wrong phase (e.g. feedback before any guess)
    #[error("unexpected input: {0}")]
    UnexpectedInput(&'static str),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, WordleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = WordleError::InvalidFeedbackFormat {
            input: "ccccx".to_string(),
            reason: "'x' is not one of c/w/u".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid feedback 'ccccx': 'x' is not one of c/w/u"
        );

        let err = WordleError::WordLengthMismatch {
            word: "toolong".to_string(),
            expected: 5,
            actual: 7,
        };
        assert_eq!(err.to_string(), "'toolong' has 7 letters, expected 5");
    }

    #[test]
    fn errors_convert_into_anyhow() {
        let err: anyhow::Error = WordleError::Unsolvable.into();
        assert!(err.to_string().contains("no candidate"));
    }
}
