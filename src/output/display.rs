//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern.to_emoji(),
            step.pattern.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let (Some(score), Some(expected)) = (step.score, step.expected_remaining) {
                println!("  Score:      {score} (Σ group size²)");
                println!("  Expected:   {expected:.1} candidates");
            }
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} guesses!", result.guesses.len())
            .green()
            .bold()
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    // Fraction of the dictionary expected to survive the guess
    let bar = create_progress_bar(
        result.expected_remaining,
        result.total_candidates as f64,
        30,
    );

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Score:       {}",
        format!("{} (Σ group size²)", result.score).bright_yellow()
    );
    println!("   Groups:      {} distinct patterns", result.groups);
    println!("   Worst case:  {} candidates", result.largest_group);
    println!(
        "   Expected:    [{}] {:.1} candidates remain",
        bar.green(),
        result.expected_remaining
    );

    if let Some((opening, score)) = &result.opening {
        println!(
            "\n🎯 Solver opening: {} (score {})",
            opening.to_uppercase().bright_green(),
            score
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for guess_count in 1..=result.max_guesses {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if result.solved > 0 {
            count as f64 / result.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guess_count:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!("   {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failures".red().bold());
        for (word, error) in &result.failures {
            println!("   {}: {}", word.to_uppercase().red(), error);
        }
    }
}
