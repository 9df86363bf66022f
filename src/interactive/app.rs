//! TUI application state and logic

use crate::core::{Board, Code, Winner};
use crate::game::GameConfig;
use crate::solver::KnuthGuessingStrategy;
use crate::solver::knuth::{minimax_score, worst_case_remaining};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub board: Board,
    /// Shadow minimax tracker: candidate counts and hints
    pub tracker: KnuthGuessingStrategy,
    /// Possible secrets left after each turn, parallel to the board's turns
    pub candidate_counts: Vec<usize>,
    pub hint: Option<HintInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HintInfo {
    pub guess: Code,
    pub minimax_score: usize,
    pub worst_case: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Guesses needed → games won
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an app whose secrets are reproducible
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let space = config.space();
        let secret = space.random_code(&mut rng);

        let mut app = Self {
            config,
            board: Board::new(secret, config.max_turns()),
            tracker: KnuthGuessingStrategy::new(space),
            candidate_counts: Vec::new(),
            hint: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };

        let range = config.value_range();
        app.add_message(
            &format!(
                "I've picked a secret of {} values from {} to {}. Crack it!",
                config.code_length(),
                range.start(),
                range.end()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Type a guess like '0011' and press Enter. 'h' for a hint.",
            MessageStyle::Info,
        );
        app
    }

    pub fn new_game(&mut self) {
        let secret = self.config.space().random_code(&mut self.rng);
        self.board = Board::new(secret, self.config.max_turns());
        self.tracker.reset();
        self.candidate_counts.clear();
        self.hint = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! A fresh secret is ready.", MessageStyle::Info);
    }

    /// Score the guess in the input buffer
    pub fn submit_guess(&mut self) {
        let guess = match self.config.space().parse_code(&self.input_buffer) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        let feedback = match self.board.add_guess(guess) {
            Ok(turn) => turn.feedback(),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.tracker.observe(self.board.turns());
        let remaining = self.candidates_count();
        self.candidate_counts.push(remaining);
        self.hint = None;

        debug!(turn = self.board.turns().len(), %feedback, remaining, "TUI guess scored");

        match self.board.winner() {
            Some(winner) => self.finish_game(winner),
            None => self.add_message(
                &format!(
                    "{feedback} | {remaining} possible codes | {} turns left",
                    self.board.turns_remaining()
                ),
                MessageStyle::Info,
            ),
        }
    }

    fn finish_game(&mut self, winner: Winner) {
        let guesses = self.board.turns().len();
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        match winner {
            Winner::CodeBreaker => {
                self.stats.games_won += 1;
                *self.stats.guess_distribution.entry(guesses).or_insert(0) += 1;

                let celebration = match guesses {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                    2..=4 => format!("🔥 CRACKED in {guesses} guesses! 🔥"),
                    _ => format!("🎉 Solved in {guesses} guesses! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
            }
            Winner::CodeMaker => {
                let secret = self.board.secret_code().to_string();
                self.add_message(
                    &format!("Out of turns! The secret was {secret}"),
                    MessageStyle::Error,
                );
            }
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Ask the minimax tracker for the next guess
    pub fn request_hint(&mut self) {
        if self.input_mode == InputMode::GameOver {
            self.add_message("The game is over; press 'n' for another.", MessageStyle::Info);
            return;
        }

        let Some(guess) = self.tracker.next_guess_for(self.board.turns()) else {
            self.add_message("No hint available!", MessageStyle::Error);
            return;
        };

        let candidates = self.tracker.possible_secret_codes();
        let hint = HintInfo {
            minimax_score: minimax_score(&guess, candidates),
            worst_case: worst_case_remaining(&guess, candidates),
            guess,
        };

        self.add_message(&format!("Hint: try {}", hint.guess), MessageStyle::Info);
        self.hint = Some(hint);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.tracker.possible_secret_codes().len()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('h') => self.request_hint(),
                KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' || c == ',' => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Esc => self.input_buffer.clear(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeSpace;

    fn app() -> App {
        App::with_seed(GameConfig::default(), 5)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn typing_and_submitting_a_guess() {
        let mut app = app();
        type_text(&mut app, "0011");
        assert_eq!(app.input_buffer, "0011");

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.board.turns().len(), 1);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.candidate_counts.len(), 1);
        assert!(app.candidates_count() <= 256);
    }

    #[test]
    fn letters_are_not_typed() {
        let mut app = app();
        type_text(&mut app, "0x1");
        assert_eq!(app.input_buffer, "01");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "0");
        press(&mut app, KeyCode::Esc);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn invalid_guess_reports_error() {
        let mut app = app();
        type_text(&mut app, "0019");
        press(&mut app, KeyCode::Enter);

        assert!(app.board.turns().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.input_buffer, "0019");
    }

    #[test]
    fn following_hints_wins() {
        let mut app = app();

        for _ in 0..5 {
            if app.input_mode == InputMode::GameOver {
                break;
            }
            press(&mut app, KeyCode::Char('h'));
            let hint = app.hint.clone().unwrap();
            type_text(&mut app, &hint.guess.to_string());
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.board.winner(), Some(Winner::CodeBreaker));
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.candidates_count(), 1);
    }

    #[test]
    fn running_out_of_turns_loses() {
        let space = CodeSpace::classic();
        let config = GameConfig::with_space(space, 1).unwrap();
        let mut app = App::with_seed(config, 8);

        // Guess anything but the secret
        let wrong = space
            .all_codes()
            .find(|code| code != app.board.secret_code())
            .unwrap();
        type_text(&mut app, &wrong.to_string());
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.board.winner(), Some(Winner::CodeMaker));
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains(&app.board.secret_code().to_string()))
        );
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = app();
        type_text(&mut app, "0011");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('n'));

        assert!(app.board.turns().is_empty());
        assert!(app.candidate_counts.is_empty());
        assert_eq!(app.candidates_count(), 1296);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
