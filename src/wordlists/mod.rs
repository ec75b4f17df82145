//! Word lists compiled into the binary
//!
//! `ANSWERS` are the words that can be hidden; `ALLOWED` is every word that
//! may be played as a guess and includes all of `ANSWERS`.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
