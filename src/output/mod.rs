//! Terminal output formatting
//!
//! Coloured codes, key pegs and result printers for the CLI commands.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use formatters::{colored_code, colored_pegs};
