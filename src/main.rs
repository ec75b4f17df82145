//! Wordle Constraint Solver - CLI
//!
//! TUI and line-oriented play modes plus solve, analyze and benchmark commands.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_constraints::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, random_target, run_benchmark, run_simple,
        solve_word, write_csv_file,
    },
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{GuessSelector, TieBreak},
    wordlists::{ALLOWED, ANSWERS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_constraints",
    about = "Wordle solver that picks the guess leaving the fewest candidates on average",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Tie-break between equally scored guesses: pool-order or prefer-candidates
    #[arg(short, long, global = true, default_value = "pool-order")]
    tie_break: String,

    /// Guess only from the answer list
    #[arg(long, global = true)]
    answers_only: bool,

    /// Answer list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Guess list file, one word per line (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Score guesses on one thread
    #[arg(long, global = true)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific target word, or a random answer
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Forced first guess
        #[arg(short, long)]
        start: Option<String>,

        /// Show candidate counts and scores per turn
        #[arg(short, long)]
        verbose: bool,

        /// Pick follow-up guesses only from the remaining candidates
        #[arg(long)]
        from_candidates: bool,
    },

    /// Analyze a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play every answer and report the mean guess count
    Benchmark {
        /// Only play the first N answers
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Opening guess (default: salet when it is in the guess list)
        #[arg(short, long)]
        start: Option<String>,

        /// Write one CSV line per answer to this file
        #[arg(short, long, default_value = "results.csv")]
        output: PathBuf,

        /// Skip writing the CSV
        #[arg(long)]
        no_output: bool,

        /// Pick follow-up guesses only from the remaining candidates
        #[arg(long)]
        from_candidates: bool,
    },
}

/// Load the guess pool and the answer list
///
/// Guesses default to the embedded allowed list, or the answers themselves
/// with `--answers-only`.
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let answers = match &cli.answers {
        Some(path) => load_from_file(path)
            .with_context(|| format!("reading answer list {}", path.display()))?,
        None => words_from_slice(ANSWERS),
    };

    let pool = match (&cli.guesses, cli.answers_only) {
        (_, true) => answers.clone(),
        (Some(path), false) => load_from_file(path)
            .with_context(|| format!("reading guess list {}", path.display()))?,
        (None, false) => words_from_slice(ALLOWED),
    };

    if answers.is_empty() {
        bail!("the answer list is empty");
    }
    if pool.is_empty() {
        bail!("the guess list is empty");
    }
    log::info!("{} guesses, {} answers", pool.len(), answers.len());
    Ok((pool, answers))
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("invalid word '{text}'"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let tie_break = TieBreak::from_name(&cli.tie_break).with_context(|| {
        format!(
            "unknown tie-break '{}': use pool-order or prefer-candidates",
            cli.tie_break
        )
    })?;
    let selector = GuessSelector::new()
        .with_tie_break(tie_break)
        .with_parallel(!cli.sequential);
    let (pool, answers) = load_wordlists(&cli)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&selector, &pool, &answers),
        Commands::Simple => run_simple(io::stdin().lock(), io::stdout(), &selector, &pool, &answers)
            .context("interactive session failed"),
        Commands::Solve {
            word,
            start,
            verbose,
            from_candidates,
        } => run_solve_command(
            word,
            start.as_deref(),
            verbose,
            from_candidates,
            &selector,
            &pool,
            &answers,
        ),
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &selector, &pool, &answers)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            limit,
            start,
            output,
            no_output,
            from_candidates,
        } => {
            let config = BenchmarkConfig {
                start: start.as_deref().map(parse_word).transpose()?,
                limit,
                output: (!no_output).then_some(output),
                parallel: !cli.sequential,
                progress: true,
                from_candidates,
            };
            run_benchmark_command(&config, &selector, &pool, &answers)
        }
    }
}

fn run_solve_command(
    word: Option<String>,
    start: Option<&str>,
    verbose: bool,
    from_candidates: bool,
    selector: &GuessSelector,
    pool: &[Word],
    answers: &[Word],
) -> Result<()> {
    let target = match word {
        Some(word) => word,
        None => random_target(answers)
            .context("no answers to pick from")?
            .to_string(),
    };

    let mut config = SolveConfig::new(target).with_from_candidates(from_candidates);
    if let Some(start) = start {
        config = config.with_start(parse_word(start)?);
    }

    let result = solve_word(&config, selector, pool, answers)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    config: &BenchmarkConfig,
    selector: &GuessSelector,
    pool: &[Word],
    answers: &[Word],
) -> Result<()> {
    let count = config.limit.map_or(answers.len(), |n| n.min(answers.len()));
    println!("Running benchmark on {count} answers...");

    let result = run_benchmark(config, selector, pool, answers)?;
    print_benchmark_result(&result);

    if let Some(path) = &config.output {
        write_csv_file(path, &result.runs)
            .with_context(|| format!("writing results to {}", path.display()))?;
        println!("\nResults written to {}", path.display());
    }
    Ok(())
}

fn run_play_command(selector: &GuessSelector, pool: &[Word], answers: &[Word]) -> Result<()> {
    use wordle_constraints::interactive::{App, run_tui};

    let app = App::new(pool, answers, selector.clone());
    run_tui(app)
}
