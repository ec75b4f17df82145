//! Word analysis command
//!
//! Measures how well a word splits the candidates and compares it with the
//! best opening guess from the pool.

use crate::core::{Result, Word, WordleError};
use crate::solver::{ConstraintSpace, GuessMetrics, GuessSelector, metrics};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Whether the word could itself be the answer
    pub is_candidate: bool,
    /// Best guess in the pool and its metrics
    pub best: Option<(Word, GuessMetrics)>,
    /// 1-based rank of the word among pool guesses, when it is in the pool
    pub rank: Option<usize>,
}

/// Analyze `word` as an opening guess against `candidates`
///
/// # Errors
///
/// - `WordLengthMismatch` / `InvalidCharacters` for a malformed word
/// - `UnknownWord` if the word is neither in the pool nor a candidate
/// - `Aborted` if the selector was cancelled
pub fn analyze_word(
    word: &str,
    selector: &GuessSelector,
    pool: &[Word],
    candidates: &[Word],
) -> Result<AnalysisResult> {
    let word = Word::new(word)?;
    let is_candidate = candidates.contains(&word);
    if !is_candidate && !pool.contains(&word) {
        return Err(WordleError::UnknownWord(word.to_string()));
    }

    let space = ConstraintSpace::new(candidates);
    let ranked = selector.rank(pool, &space, pool.len())?;

    let best = ranked
        .first()
        .map(|scored| (*scored.word, metrics(scored.word, &space)));
    let rank = ranked
        .iter()
        .position(|scored| *scored.word == word)
        .map(|i| i + 1);

    Ok(AnalysisResult {
        word,
        metrics: metrics(&word, &space),
        total_candidates: space.len(),
        is_candidate,
        best,
        rank,
    })
}
