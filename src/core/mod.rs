//! Core domain types for Mastermind
//!
//! This module contains the value types the rest of the crate is built on:
//! codes, their feedback, turns and the board. Everything here is pure and
//! single-threaded; the only mutation is `Board::add_guess`.

mod board;
mod code;
mod feedback;
mod space;
mod turn;

pub use board::{Board, GameOverError, Winner};
pub use code::{Code, CodeError};
pub use feedback::{Feedback, FeedbackParseError};
pub use space::{AllCodes, CodeSpace, MAX_CODE_LENGTH, ValueRange};
pub use turn::Turn;
