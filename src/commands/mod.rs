//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use assist::{AssistSummary, run_assist};
pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark};
pub use play::{ConsoleIo, Seat, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, play_out, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all, test_secrets};
