//! Wordle Constraint Solver
//!
//! Tracks what feedback reveals about the hidden word and suggests the guess
//! that leaves the fewest candidates on average.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_constraints::core::{Word, compute_feedback};
//! use wordle_constraints::solver::{ConstraintSpace, choose_guess};
//! use wordle_constraints::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["crane", "slate", "trace", "grape", "place"]);
//! let mut space = ConstraintSpace::new(&words);
//!
//! let guess = choose_guess(&words, &space).unwrap();
//! let answer = Word::new("trace").unwrap();
//! space.apply(guess, compute_feedback(guess, &answer)).unwrap();
//!
//! assert_eq!(space.candidates(), [&answer]);
//! ```

// Core domain types
pub mod core;

// Constraint tracking and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
