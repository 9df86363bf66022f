//! Interactive TUI game
//!
//! The player breaks a random secret; a minimax tracker follows along to count
//! the remaining codes and offer hints.

mod app;
mod rendering;

pub use app::{App, HintInfo, InputMode, Message, MessageStyle, Statistics, run_tui};
