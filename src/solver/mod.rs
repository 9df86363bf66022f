//! Mastermind guessing algorithms
//!
//! This module contains the guessing strategies: a random baseline and
//! Knuth's minimax search.

pub mod knuth;
pub mod strategy;

pub use knuth::KnuthGuessingStrategy;
pub use strategy::{GuessingStrategy, RandomGuessingStrategy, StrategyType};
