//! The I/O collaborator a game talks to

use super::GameConfig;
use crate::core::{Board, Code, CodeSpace, Winner};
use anyhow::Result;

/// Output to and input from the people at the table
///
/// Implementations that read input are expected to re-prompt on malformed
/// entries and only return codes that fit `space`.
pub trait GameIo {
    /// Announce the start of a game
    fn start_game(&mut self, config: &GameConfig) -> Result<()>;

    /// Ask the code maker for a secret code
    fn create_secret_code(&mut self, space: &CodeSpace) -> Result<Code>;

    /// Show the board with every turn so far
    fn show_board(&mut self, board: &Board) -> Result<()>;

    /// Ask the code breaker for the next guess
    fn make_guess(&mut self, board: &Board, space: &CodeSpace) -> Result<Code>;

    /// Announce the end of the game
    fn announce_winner(&mut self, board: &Board, winner: Winner) -> Result<()>;
}
