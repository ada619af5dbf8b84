//! Pretty-printing for command results

use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::output::formatters::{colorize_guess, create_progress_bar, feedback_to_emoji};
use colored::Colorize;

/// Print a solve command result
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!();
    for (i, step) in result.steps.iter().enumerate() {
        print!(
            "  {}. {} {}",
            i + 1,
            colorize_guess(&step.word, step.feedback),
            feedback_to_emoji(step.feedback)
        );
        if verbose {
            if let Some(entropy) = step.entropy {
                print!(
                    "  {:.2} bits, {} -> {} candidates",
                    entropy, step.candidates_before, step.candidates_after
                );
            } else {
                print!("  {} candidate left", step.candidates_before);
            }
        }
        println!();
    }

    println!();
    if result.success {
        println!(
            "{} {} in {} guesses",
            "Solved".bright_green().bold(),
            result.target.to_uppercase().bold(),
            result.steps.len()
        );
    } else {
        println!(
            "{} {} not solved within the attempt budget",
            "Failed:".bright_red().bold(),
            result.target.to_uppercase().bold()
        );
    }
}

/// Print an analyze command result
pub fn print_analysis_result(result: &AnalysisResult) {
    println!();
    println!("Analysis of {}", result.word.to_uppercase().bold());
    println!(
        "  Entropy:            {:.3} bits  {}",
        result.entropy,
        create_progress_bar(result.entropy, 6.0, 20)
    );
    println!("  Expected remaining: {:.1}", result.expected_remaining);
    println!("  Worst case:         {}", result.max_partition);
    println!(
        "  Win probability:    {:.2}%",
        result.p_correct * 100.0
    );
    println!("  Possibility set:    {}", result.possibilities);
}

/// Print a benchmark command result
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!();
    println!("Benchmark over {} words", result.total_words);
    println!(
        "  Solved:       {}/{}",
        result.solved, result.total_words
    );
    println!("  Average:      {:.3} guesses", result.average_guesses);
    println!(
        "  Range:        {}-{} guesses",
        result.min_guesses, result.max_guesses
    );
    println!(
        "  Throughput:   {:.1} words/s ({:.2?} total)",
        result.words_per_second, result.duration
    );

    let mut counts: Vec<(usize, usize)> = result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
    counts.sort_unstable();
    let largest = counts.iter().map(|&(_, v)| v).max().unwrap_or(1);

    println!("  Distribution:");
    for (guesses, count) in counts {
        println!(
            "    {guesses}: {} {count}",
            create_progress_bar(count as f64, largest as f64, 30)
        );
    }
}
