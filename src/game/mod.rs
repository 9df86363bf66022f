//! Game orchestration
//!
//! Players, the I/O collaborator they talk through, and the engine that
//! sequences a game from the secret code to the winner.

mod config;
mod engine;
mod io;
mod player;

pub use config::{ConfigError, DEFAULT_MAX_TURNS, GameConfig};
pub use engine::{GameEngine, GameOutcome};
pub use io::GameIo;
pub use player::{ComputerPlayer, HumanPlayer, Player};
