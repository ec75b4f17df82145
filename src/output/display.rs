//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, reduction_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(&step.word, step.feedback),
            step.feedback
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.2} candidates");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved after {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let m = &result.metrics;
    let bar = reduction_bar(m.expected_remaining, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.2} remain", m.expected_remaining).bright_yellow()
    );
    println!("   Worst case:  {} remain", m.worst_case);
    println!("   Partitions:  {}", m.partitions);
    println!(
        "   Candidate:   {}",
        if result.is_candidate { "yes" } else { "no" }
    );
    if let Some(rank) = result.rank {
        println!("   Rank:        #{rank}");
    }

    if let Some((best, best_metrics)) = &result.best {
        println!(
            "\n🏆 Best opening: {} ({:.2} expected, worst case {})",
            best.text().to_uppercase().bright_green().bold(),
            best_metrics.expected_remaining,
            best_metrics.worst_case
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Opening guess:    {}",
        result.opening.text().to_uppercase().bright_white().bold()
    );
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Mean (solved):    {}",
        format!("{:.4}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    if result.failures > 0 {
        println!(
            "   Unsolved:         {}",
            result.failures.to_string().red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = count as f64 / result.total_words as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let label = if guesses > 6 {
            guesses.to_string().red().to_string()
        } else {
            guesses.to_string()
        };
        println!("   {label:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
