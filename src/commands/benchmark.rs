//! Benchmark command
//!
//! Plays every answer (or the first `limit`) from the same opening guess and
//! writes one CSV record per answer: `answer,guess_count,guess_1,...`.

use super::solve::{SolveConfig, solve_word};
use crate::core::{Result, Word, WordleError};
use crate::solver::{ConstraintSpace, GuessSelector};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Opening guess used when none is given and it is in the pool
pub const DEFAULT_START: &str = "salet";

/// Upper bound on turns per answer
const TURN_CAP: usize = 20;

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Forced opening guess
    pub start: Option<Word>,
    /// Only play the first `limit` answers
    pub limit: Option<usize>,
    /// Where the caller should write the CSV
    pub output: Option<PathBuf>,
    /// Play answers on the rayon thread pool
    pub parallel: bool,
    /// Draw a progress bar on stderr
    pub progress: bool,
    /// Follow-up guesses come from the remaining candidates only
    pub from_candidates: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            start: None,
            limit: None,
            output: None,
            parallel: true,
            progress: false,
            from_candidates: false,
        }
    }
}

/// Guesses played for one answer
#[derive(Debug, Clone)]
pub struct AnswerRun {
    pub answer: Word,
    pub guesses: Vec<Word>,
    pub solved: bool,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub opening: Word,
    pub runs: Vec<AnswerRun>,
    pub total_words: usize,
    /// Mean guess count over solved answers; failures are counted separately
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of answers solved with it
    pub distribution: BTreeMap<usize, usize>,
    pub failures: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// The opening guess for a run
///
/// An explicit start wins, then `salet` when the pool has it, otherwise the
/// selector's choice over the full candidate set.
///
/// # Errors
/// `Aborted` if the selector was cancelled.
pub fn opening_guess(
    start: Option<Word>,
    selector: &GuessSelector,
    pool: &[Word],
    answers: &[Word],
) -> Result<Option<Word>> {
    if start.is_some() {
        return Ok(start);
    }
    if let Some(salet) = pool.iter().find(|w| w.text() == DEFAULT_START) {
        return Ok(Some(*salet));
    }
    let space = ConstraintSpace::new(answers);
    Ok(selector.choose(pool, &space)?.copied())
}

/// Play every answer from one opening guess
///
/// The opening is computed once and shared by all answers. Runs keep the
/// order of `answers` regardless of `config.parallel`.
///
/// # Errors
/// `Aborted` if the selector was cancelled, `Unsolvable` if there is nothing
/// to guess.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    selector: &GuessSelector,
    pool: &[Word],
    answers: &[Word],
) -> Result<BenchmarkResult> {
    let opening = opening_guess(config.start, selector, pool, answers)?
        .ok_or(WordleError::Unsolvable)?;
    let targets = &answers[..config.limit.map_or(answers.len(), |n| n.min(answers.len()))];
    info!("benchmark: {} answers from {opening}", targets.len());

    let pb = if config.progress {
        progress_bar(targets.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let play = |answer: &Word| -> Result<AnswerRun> {
        let solve_config = SolveConfig::new(answer.to_string())
            .with_start(opening)
            .with_max_turns(TURN_CAP)
            .with_from_candidates(config.from_candidates);
        let result = solve_word(&solve_config, selector, pool, answers)?;
        pb.inc(1);
        Ok(AnswerRun {
            answer: *answer,
            guesses: result.words(),
            solved: result.success,
        })
    };

    let runs: Vec<AnswerRun> = if config.parallel {
        targets.par_iter().map(play).collect::<Result<_>>()?
    } else {
        targets.iter().map(play).collect::<Result<_>>()?
    };
    pb.finish_and_clear();
    let duration = start.elapsed();

    let result = summarize(opening, runs, duration);
    info!(
        "benchmark: mean {:.4} over {} answers, {} failures",
        result.average_guesses, result.total_words, result.failures
    );
    Ok(result)
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {eta}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

fn summarize(opening: Word, runs: Vec<AnswerRun>, duration: Duration) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    let mut total_guesses = 0;
    let mut failures = 0;
    for run in &runs {
        if run.solved {
            *distribution.entry(run.guesses.len()).or_insert(0) += 1;
            total_guesses += run.guesses.len();
        } else {
            failures += 1;
        }
    }

    let solved = runs.len() - failures;
    let total_words = runs.len();
    BenchmarkResult {
        opening,
        total_words,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: if duration.as_secs_f64() > 0.0 {
            total_words as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
        runs,
    }
}

/// Write one `answer,guess_count,guesses...` line per run
///
/// # Errors
/// Any I/O error from `writer`.
pub fn write_csv<W: Write>(mut writer: W, runs: &[AnswerRun]) -> io::Result<()> {
    for run in runs {
        write!(writer, "{},{}", run.answer, run.guesses.len())?;
        for guess in &run.guesses {
            write!(writer, ",{guess}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

/// Write the CSV to `path`, replacing any existing file
///
/// # Errors
/// Any I/O error creating or writing the file.
pub fn write_csv_file(path: &Path, runs: &[AnswerRun]) -> io::Result<()> {
    write_csv(BufWriter::new(File::create(path)?), runs)
}
