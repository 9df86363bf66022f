//! Display functions for command results

use super::formatters::{colored_code, colored_pegs, create_progress_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let code_length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", colored_code(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_code(&step.guess),
            colored_pegs(step.feedback, code_length)
        );

        if verbose {
            println!(
                "  Candidates:  {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let (Some(score), Some(worst)) = (step.minimax_score, step.worst_case) {
                println!("  Minimax:     eliminates at least {score}");
                println!("  Worst case:  {worst} remain");
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
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let code_length = result.guess.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        colored_code(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!(
        "   Minimax score:  {}",
        result.minimax_score.to_string().bright_yellow()
    );
    println!("   Worst case:     {} remain", result.worst_case_remaining);
    println!("   Outcomes:       {}", result.partitions.len());
    println!("   Entropy:        {:.3} bits", result.entropy);
    println!(
        "   Expected:       {:.1} codes remain",
        result.expected_remaining
    );

    println!("\n📈 {}", "Partitions:".bright_cyan().bold());
    let largest = result.partitions.first().map_or(1, |&(_, count)| count);
    for &(feedback, count) in &result.partitions {
        let bar = create_progress_bar(count as f64, largest as f64, 30);
        println!(
            "   {}  {} {count:5}",
            colored_pegs(feedback, code_length),
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
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
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut guess_counts: Vec<usize> = result.distribution.keys().copied().collect();
    guess_counts.sort_unstable();
    for guess_count in guess_counts {
        let count = result.distribution[&guess_count];
        let pct = (count as f64 / result.solved.max(1) as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
