//! Test every code - comprehensive strategy evaluation
//!
//! Runs the strategy against every secret in the code space and generates statistics.

use super::solve::play_out;
use crate::core::{Board, Code, CodeSpace, Winner};
use crate::output::formatters::create_progress_bar;
use crate::solver::StrategyType;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from playing against a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_codes: Vec<(Code, usize)>,
    pub failed_codes: Vec<Code>,
}

/// Enumerate the secrets to test: the whole space, or its first `limit` codes
///
/// Stops enumerating at `limit`, so a limited run on a large space stays cheap.
#[must_use]
pub fn test_secrets(space: &CodeSpace, limit: Option<usize>) -> Vec<Code> {
    match limit {
        Some(limit) => space.all_codes().take(limit).collect(),
        None => space.all_codes().collect(),
    }
}

/// Run the strategy against every secret (or the first `limit`)
///
/// # Panics
///
/// Panics if the progress bar template is malformed, which it is not.
pub fn run_test_all(
    strategy: &StrategyType,
    secrets: &[Code],
    max_turns: usize,
    limit: Option<usize>,
    show_progress: bool,
) -> TestAllStatistics {
    let test_codes = &secrets[..limit.unwrap_or(secrets.len()).min(secrets.len())];

    let pb = if show_progress {
        let pb = ProgressBar::new(test_codes.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut results = Vec::with_capacity(test_codes.len());
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut guesses_so_far = 0;

    let total_start = Instant::now();

    for (idx, secret) in test_codes.iter().enumerate() {
        let mut game_strategy = strategy.clone();
        let mut board = Board::new(secret.clone(), max_turns);
        let success = play_out(&mut game_strategy, &mut board) == Some(Winner::CodeBreaker);
        let num_guesses = board.turns().len();

        if success {
            *guess_distribution.entry(num_guesses).or_insert(0) += 1;
        }
        guesses_so_far += num_guesses;

        results.push(CodeTestResult {
            secret: secret.clone(),
            num_guesses,
            success,
        });

        if idx % 10 == 0 {
            let avg = guesses_so_far as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();
    let solved_count = solved.len();

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = solved.iter().map(|r| r.num_guesses).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.num_guesses).min().unwrap_or(0);

    let mut worst_codes: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.num_guesses == max_guesses)
        .map(|r| (r.secret.clone(), r.num_guesses))
        .collect();
    worst_codes.truncate(10);

    let failed_codes: Vec<Code> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.secret.clone())
        .collect();

    TestAllStatistics {
        strategy: strategy.name(),
        total_codes: results.len(),
        solved: solved_count,
        failed: failed_codes.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        worst_codes,
        failed_codes,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ({} strategy) ", stats.strategy);
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Worst case:          {} guesses",
        stats.max_guesses.to_string().yellow()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    let mut guess_counts: Vec<usize> = stats.guess_distribution.keys().copied().collect();
    guess_counts.sort_unstable();
    for guesses in guess_counts {
        let count = stats.guess_distribution[&guesses];
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses:2} guesses: {} {count:5} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.worst_codes.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Codes ({} guesses)", stats.max_guesses)
                .yellow()
                .bold()
        );
        for (code, _) in &stats.worst_codes {
            println!("  {code}");
        }
    }

    if !stats.failed_codes.is_empty() {
        println!("\n❌ {}", "Unsolved Codes".red().bold());
        for code in stats.failed_codes.iter().take(10) {
            println!("  {code}");
        }
        if stats.failed_codes.len() > 10 {
            println!("  … and {} more", stats.failed_codes.len() - 10);
        }
    }
}
