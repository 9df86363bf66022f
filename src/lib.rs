//! Mastermind Solver
//!
//! A Mastermind code breaker built on Knuth's minimax strategy, which solves
//! every classic game (4 positions, 6 colours) in at most five guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Board, CodeSpace, Winner};
//! use mastermind_solver::solver::{GuessingStrategy, KnuthGuessingStrategy};
//!
//! let space = CodeSpace::classic();
//! let secret = space.parse_code("3333").unwrap();
//! let mut board = Board::new(secret, 12);
//! let mut strategy = KnuthGuessingStrategy::new(space);
//!
//! while !board.game_over() {
//!     let guess = strategy.next_guess(&board).unwrap();
//!     board.add_guess(guess).unwrap();
//! }
//!
//! assert_eq!(board.winner(), Some(Winner::CodeBreaker));
//! assert_eq!(board.turns().len(), 4);
//! ```

// Core domain types
pub mod core;

// Guessing strategies
pub mod solver;

// Game loop, players and configuration
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
