//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{
    AnswerRun, BenchmarkConfig, BenchmarkResult, run_benchmark, write_csv, write_csv_file,
};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, random_target, solve_word};
