//! Runs one game of Mastermind between two players

use super::{GameConfig, GameIo, Player};
use crate::core::{Board, Code, Turn, Winner};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Winner,
    pub secret: Code,
    pub turns: Vec<Turn>,
}

impl GameOutcome {
    /// Number of guesses the code breaker made
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.turns.len()
    }
}

/// Sequences a game: announce, take the secret, loop guesses, announce the winner
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one game to completion
    ///
    /// # Errors
    /// Returns an error if the I/O collaborator fails, or if either player
    /// produces a code that does not fit the configured code space.
    pub fn run(
        &self,
        code_maker: &mut dyn Player,
        code_breaker: &mut dyn Player,
        io: &mut dyn GameIo,
    ) -> Result<GameOutcome> {
        let space = self.config.space();

        io.start_game(&self.config)?;

        let secret = code_maker.create_secret_code(&space, io)?;
        space
            .validate(&secret)
            .with_context(|| format!("{} made an invalid secret code", code_maker.name()))?;

        info!(
            maker = code_maker.name(),
            breaker = code_breaker.name(),
            code_length = space.code_length(),
            max_turns = self.config.max_turns(),
            "Game started"
        );

        let mut board = Board::new(secret, self.config.max_turns());

        let winner = loop {
            if let Some(winner) = board.winner() {
                break winner;
            }

            io.show_board(&board)?;

            let guess = code_breaker.make_guess(&board, &space, io)?;
            space
                .validate(&guess)
                .with_context(|| format!("{} made an invalid guess", code_breaker.name()))?;

            let feedback = board.add_guess(guess)?.feedback();
            debug!(turn = board.turns().len(), %feedback, "Turn played");
        };

        io.announce_winner(&board, winner)?;
        info!(%winner, turns = board.turns().len(), "Game over");

        Ok(GameOutcome {
            winner,
            secret: board.secret_code().clone(),
            turns: board.turns().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeSpace, Feedback, ValueRange};
    use crate::game::{ComputerPlayer, HumanPlayer};
    use crate::solver::StrategyType;
    use anyhow::anyhow;
    use std::collections::VecDeque;

    /// Plays back canned codes and records what the engine told it
    #[derive(Default)]
    struct ScriptedIo {
        secret: Option<Code>,
        guesses: VecDeque<Code>,
        events: Vec<String>,
    }

    impl GameIo for ScriptedIo {
        fn start_game(&mut self, config: &GameConfig) -> Result<()> {
            self.events.push(format!("start {}", config.max_turns()));
            Ok(())
        }

        fn create_secret_code(&mut self, _space: &CodeSpace) -> Result<Code> {
            self.secret.take().ok_or_else(|| anyhow!("no secret scripted"))
        }

        fn show_board(&mut self, board: &Board) -> Result<()> {
            self.events.push(format!("board {}", board.turns().len()));
            Ok(())
        }

        fn make_guess(&mut self, _board: &Board, _space: &CodeSpace) -> Result<Code> {
            self.guesses.pop_front().ok_or_else(|| anyhow!("out of guesses"))
        }

        fn announce_winner(&mut self, _board: &Board, winner: Winner) -> Result<()> {
            self.events.push(format!("winner {winner}"));
            Ok(())
        }
    }

    fn code(values: &[u8]) -> Code {
        CodeSpace::classic().code(values).unwrap()
    }

    fn scripted(secret: &[u8], guesses: &[&[u8]]) -> ScriptedIo {
        ScriptedIo {
            secret: Some(code(secret)),
            guesses: guesses.iter().map(|g| code(g)).collect(),
            events: Vec::new(),
        }
    }

    fn engine(max_turns: usize) -> GameEngine {
        GameEngine::new(GameConfig::with_space(CodeSpace::classic(), max_turns).unwrap())
    }

    #[test]
    fn human_breaker_wins() {
        let mut io = scripted(&[1, 2, 3, 4], &[&[1, 1, 2, 2], &[1, 2, 3, 4]]);
        let mut maker = HumanPlayer::new("Maker");
        let mut breaker = HumanPlayer::new("Breaker");

        let outcome = engine(12).run(&mut maker, &mut breaker, &mut io).unwrap();

        assert_eq!(outcome.winner, Winner::CodeBreaker);
        assert_eq!(outcome.secret, code(&[1, 2, 3, 4]));
        assert_eq!(outcome.guesses(), 2);
        assert_eq!(outcome.turns[0].feedback(), Feedback::new(1, 1));
        assert_eq!(
            io.events,
            ["start 12", "board 0", "board 1", "winner code breaker"]
        );
    }

    #[test]
    fn code_maker_wins_when_turns_run_out() {
        let mut io = scripted(&[1, 2, 3, 4], &[&[0, 0, 0, 0], &[5, 5, 5, 5]]);
        let mut maker = HumanPlayer::new("Maker");
        let mut breaker = HumanPlayer::new("Breaker");

        let outcome = engine(2).run(&mut maker, &mut breaker, &mut io).unwrap();

        assert_eq!(outcome.winner, Winner::CodeMaker);
        assert_eq!(outcome.guesses(), 2);
        assert_eq!(io.events.last().unwrap(), "winner code maker");
    }

    #[test]
    fn computer_breaker_solves_human_secret() {
        let mut io = scripted(&[0, 1, 2, 3], &[]);
        let mut maker = HumanPlayer::new("Maker");
        let strategy = StrategyType::from_name("knuth", CodeSpace::classic());
        let mut breaker = ComputerPlayer::new("Computer", strategy);

        let outcome = engine(12).run(&mut maker, &mut breaker, &mut io).unwrap();

        assert_eq!(outcome.winner, Winner::CodeBreaker);
        let guesses: Vec<String> = outcome.turns.iter().map(|t| t.guess().to_string()).collect();
        assert_eq!(guesses, ["0011", "0023", "0123"]);
    }

    #[test]
    fn computer_versus_computer_finishes() {
        let space = CodeSpace::classic();
        let mut io = ScriptedIo::default();
        let mut maker =
            ComputerPlayer::with_seed("Maker", StrategyType::from_name("random", space), 3);
        let mut breaker = ComputerPlayer::new("Breaker", StrategyType::from_name("knuth", space));

        let outcome = engine(12).run(&mut maker, &mut breaker, &mut io).unwrap();

        assert_eq!(outcome.winner, Winner::CodeBreaker);
        assert!(outcome.guesses() <= 5);
        assert_eq!(outcome.turns.last().unwrap().guess(), &outcome.secret);
    }

    #[test]
    fn invalid_secret_is_an_error() {
        let wide = CodeSpace::new(4, ValueRange::new(0, 9).unwrap()).unwrap();
        let mut io = ScriptedIo {
            secret: Some(wide.code(&[9, 9, 9, 9]).unwrap()),
            ..ScriptedIo::default()
        };
        let mut maker = HumanPlayer::new("Maker");
        let mut breaker = HumanPlayer::new("Breaker");

        let err = engine(12)
            .run(&mut maker, &mut breaker, &mut io)
            .unwrap_err();

        assert!(err.to_string().contains("Maker made an invalid secret code"));
    }

    #[test]
    fn invalid_guess_is_an_error() {
        let short = CodeSpace::new(3, ValueRange::default()).unwrap();
        let mut io = scripted(&[1, 2, 3, 4], &[]);
        io.guesses.push_back(short.code(&[1, 2, 3]).unwrap());
        let mut maker = HumanPlayer::new("Maker");
        let mut breaker = HumanPlayer::new("Breaker");

        let err = engine(12)
            .run(&mut maker, &mut breaker, &mut io)
            .unwrap_err();

        assert!(err.to_string().contains("Breaker made an invalid guess"));
    }

    #[test]
    fn io_failure_propagates() {
        let mut io = scripted(&[1, 2, 3, 4], &[&[0, 0, 0, 0]]);
        let mut maker = HumanPlayer::new("Maker");
        let mut breaker = HumanPlayer::new("Breaker");

        let err = engine(12)
            .run(&mut maker, &mut breaker, &mut io)
            .unwrap_err();

        assert_eq!(err.to_string(), "out of guesses");
    }
}
