//! Mastermind Solver - CLI
//!
//! Mastermind code breaker with TUI and console modes, built on Knuth's
//! minimax strategy (at most five guesses on the classic board).

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        ConsoleIo, Seat, SolveConfig, analyze_guess, print_test_all_statistics, random_secrets,
        run_assist, run_benchmark, run_play, run_test_all, solve_code, test_secrets,
    },
    core::ValueRange,
    game::{DEFAULT_MAX_TURNS, GameConfig},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::StrategyType,
};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code breaker using Knuth's minimax strategy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: knuth (default) or random
    #[arg(short, long, global = true, default_value = "knuth")]
    strategy: String,

    /// Number of positions in a code
    #[arg(short = 'l', long, global = true, default_value_t = 4)]
    length: usize,

    /// Number of colours, numbered from 0
    #[arg(short = 'c', long, global = true, default_value_t = 6)]
    colors: u8,

    /// Maximum number of guesses per game
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default): break a random secret with hints
    Play,

    /// Console game with a choice of who makes and who breaks the code
    Console {
        /// Who picks the secret
        #[arg(long, value_enum, default_value = "computer")]
        maker: Seat,

        /// Who guesses
        #[arg(long, value_enum, default_value = "human")]
        breaker: Seat,
    },

    /// Assistant for a game played elsewhere: suggests guesses, you type the feedback
    Assist,

    /// Solve a specific secret code
    Solve {
        /// The secret to solve, e.g. 0123 or "0 1 2 3"
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze how a guess partitions the possible codes
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark the strategy on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for generating the secrets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test the strategy on EVERY possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(cli.log_level);

    let range = ValueRange::with_symbols(cli.colors)?;
    let config = GameConfig::new(cli.length, range, cli.max_turns)?;
    debug!(
        code_length = config.code_length(),
        colors = cli.colors,
        max_turns = config.max_turns(),
        "Game configuration"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Console { maker, breaker } => {
            run_console_command(config, maker, breaker, &cli.strategy)
        }
        Commands::Assist => run_assist_command(config),
        Commands::Solve { secret, verbose } => {
            run_solve_command(config, &cli.strategy, &secret, verbose)
        }
        Commands::Analyze { guess } => run_analyze_command(config, &guess),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(config, &cli.strategy, count, seed);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(config, &cli.strategy, limit);
            Ok(())
        }
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    info!("Starting TUI game");
    run_tui(App::new(config))
}

fn run_console_command(
    config: GameConfig,
    maker: Seat,
    breaker: Seat,
    strategy_name: &str,
) -> Result<()> {
    let mut console = ConsoleIo::new(io::stdin().lock(), io::stdout());
    let outcome = run_play(config, maker, breaker, strategy_name, &mut console)?;
    info!(winner = %outcome.winner, guesses = outcome.guesses(), "Console game finished");
    Ok(())
}

fn run_assist_command(config: GameConfig) -> Result<()> {
    let summary = run_assist(config.space(), io::stdin().lock(), io::stdout())?;
    info!(games_solved = summary.games_solved, "Assistant closed");
    Ok(())
}

fn run_solve_command(
    config: GameConfig,
    strategy_name: &str,
    secret: &str,
    verbose: bool,
) -> Result<()> {
    let mut strategy = StrategyType::from_name(strategy_name, config.space());
    let solve_config = SolveConfig::new(secret.to_string(), config.space(), config.max_turns());
    let result = solve_code(solve_config, &mut strategy).map_err(|e| anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(config: GameConfig, guess: &str) -> Result<()> {
    let result = analyze_guess(guess, &config.space()).map_err(|e| anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: GameConfig, strategy_name: &str, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Running benchmark on {count} random secrets (seed {seed})...");

    let strategy = StrategyType::from_name(strategy_name, config.space());
    let secrets = random_secrets(&config.space(), count, seed);
    let result = run_benchmark(&strategy, &secrets, config.max_turns());
    print_benchmark_result(&result);
}

fn run_test_all_command(config: GameConfig, strategy_name: &str, limit: Option<usize>) {
    let space = config.space();
    let secrets = test_secrets(&space, limit);

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} secrets ({} positions, {} colours)",
        secrets.len(),
        config.code_length(),
        config.value_range().len()
    );
    println!("Strategy: {strategy_name}");
    println!();

    let strategy = StrategyType::from_name(strategy_name, space);
    let stats = run_test_all(&strategy, &secrets, config.max_turns(), None, true);
    print_test_all_statistics(&stats);
}
