//! Console session - the menu / turn / play-again loop, without the I/O.
//!
//! [`Session`] is fed prompt keys and periodic ticks by the binary and
//! exposes everything a renderer needs. Keeping it free of terminal calls
//! makes the whole console flow testable.
//!
//! # Turn flow
//!
//! 1. Entering a turn arms the engine countdown.
//! 2. Keys are collected into a line by the [`LineEditor`].
//! 3. On submit the countdown is stopped; an expired countdown discards the
//!    guess, otherwise the guess goes to [`HangmanGame::make_guess`].
//! 4. [`Session::tick`] notices a countdown that expired while the player was
//!    still typing, so a stalled player is penalized without waiting for Enter.

use std::time::Duration;

use tracing::info;

use hangman_core::{GameConfig, HangmanGame};
use hangman_input::{
    is_affirmative, is_quit_command, parse_menu_choice, LineEditor, LineEvent, MenuChoice,
    PromptKey,
};

pub use hangman_core as core;
pub use hangman_input as input;
pub use hangman_types as types;

use crate::types::{Level, MESSAGE_LOG_CAPACITY};

pub const MENU_PROMPT: &str = "Enter your choice (1-3): ";
pub const GUESS_PROMPT: &str = "Enter a letter: ";
pub const PLAY_AGAIN_PROMPT: &str = "Play again? (y/n): ";

pub const INVALID_CHOICE: &str = "Invalid choice! Please try again.";
pub const TIME_UP: &str = "Time's up! You lose a life.";
pub const QUIT_BY_USER: &str = "Game quit by user.";
pub const FAREWELL: &str = "Thanks for playing Hangman!";

/// Which screen the console is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    PlayAgain,
    Exit,
}

/// Builds the game for a chosen level.
pub type GameFactory = Box<dyn FnMut(Level, &GameConfig) -> HangmanGame + Send>;

pub struct Session {
    screen: Screen,
    config: GameConfig,
    factory: GameFactory,
    game: Option<HangmanGame>,
    editor: LineEditor,
    messages: Vec<String>,
}

impl Session {
    /// A session that draws random answers.
    pub fn new(config: GameConfig) -> Self {
        Self::with_factory(
            config,
            Box::new(|level: Level, config: &GameConfig| HangmanGame::from_config(level, config)),
        )
    }

    pub fn with_factory(config: GameConfig, factory: GameFactory) -> Self {
        Self {
            screen: Screen::Menu,
            config,
            factory,
            game: None,
            editor: LineEditor::new(),
            messages: Vec::with_capacity(MESSAGE_LOG_CAPACITY),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_running(&self) -> bool {
        self.screen != Screen::Exit
    }

    pub fn game(&self) -> Option<&HangmanGame> {
        self.game.as_ref()
    }

    /// Recent feedback, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Text typed at the current prompt so far.
    pub fn input(&self) -> String {
        self.editor.text()
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match self.screen {
            Screen::Menu => Some(MENU_PROMPT),
            Screen::Playing => Some(GUESS_PROMPT),
            Screen::PlayAgain => Some(PLAY_AGAIN_PROMPT),
            Screen::Exit => None,
        }
    }

    /// Whole seconds left on the current guess, rounded up.
    pub fn seconds_left(&self) -> Option<u64> {
        if self.screen != Screen::Playing {
            return None;
        }
        self.game
            .as_ref()
            .and_then(HangmanGame::time_remaining)
            .map(ceil_secs)
    }

    pub fn handle_key(&mut self, key: PromptKey) {
        if self.screen == Screen::Exit {
            return;
        }
        if let Some(event) = self.editor.handle(key) {
            self.handle_line(event);
        }
    }

    /// Dispatch a finished line for the current screen.
    pub fn handle_line(&mut self, event: LineEvent) {
        match (self.screen, event) {
            (Screen::Menu, LineEvent::Submitted(line)) => match parse_menu_choice(&line) {
                Some(MenuChoice::Play(level)) => self.start_game(level),
                Some(MenuChoice::Quit) => self.exit(),
                None => self.push_message(INVALID_CHOICE),
            },
            (Screen::Playing, LineEvent::Submitted(line)) => self.submit_guess(&line),
            (Screen::Playing, LineEvent::Interrupted) => self.quit_game(),
            (Screen::PlayAgain, LineEvent::Submitted(line)) if is_affirmative(&line) => {
                self.back_to_menu()
            }
            (Screen::Menu | Screen::PlayAgain, _) => self.exit(),
            (Screen::Exit, _) => {}
        }
    }

    /// Observe a countdown that ran out while waiting for input.
    pub fn tick(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        if self.game.as_ref().is_some_and(HangmanGame::is_time_expired) {
            self.editor.clear();
            self.resolve_timeout();
        }
    }

    fn start_game(&mut self, level: Level) {
        let mut game = (self.factory)(level, &self.config);
        info!(level = %level, lives = game.max_lives(), "starting game");

        self.messages.clear();
        self.push_message(format!("Starting {} Level!", level.title()));
        self.push_message(format!(
            "Try to guess the word/phrase. You have {} lives.",
            game.max_lives()
        ));

        game.start_timer();
        self.game = Some(game);
        self.screen = Screen::Playing;
    }

    fn submit_guess(&mut self, line: &str) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        game.stop_timer();
        if game.is_time_expired() {
            self.resolve_timeout();
            return;
        }

        if is_quit_command(line) {
            self.quit_game();
            return;
        }

        let outcome = game.make_guess(line);
        let over = game.game_over();
        if !over {
            game.start_timer();
        }

        self.push_message(outcome.message());
        if over {
            self.finish_game();
        }
    }

    /// The countdown cost a life: report it and either end the game or
    /// move on to the next guess.
    fn resolve_timeout(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        game.stop_timer();
        let revealed = game.revealed_answer().map(str::to_string);
        if revealed.is_none() {
            game.start_timer();
        }

        self.push_message(TIME_UP);
        if let Some(answer) = revealed {
            self.push_message(format!("Game Over! The answer was: {answer}"));
            self.finish_game();
        }
    }

    fn quit_game(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.stop_timer();
        }
        info!("game quit by user");
        self.push_message(QUIT_BY_USER);
        self.screen = Screen::PlayAgain;
    }

    fn finish_game(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.stop_timer();
            info!(won = game.won(), lives = game.lives(), "game finished");
        }
        self.screen = Screen::PlayAgain;
    }

    fn back_to_menu(&mut self) {
        self.game = None;
        self.messages.clear();
        self.editor.clear();
        self.screen = Screen::Menu;
    }

    fn exit(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.stop_timer();
        }
        self.editor.clear();
        self.screen = Screen::Exit;
    }

    fn push_message(&mut self, message: impl Into<String>) {
        if self.messages.len() == MESSAGE_LOG_CAPACITY {
            self.messages.remove(0);
        }
        self.messages.push(message.into());
    }
}

fn ceil_secs(d: Duration) -> u64 {
    d.as_secs() + u64::from(d.subsec_nanos() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_session() -> Session {
        Session::with_factory(
            GameConfig::default(),
            Box::new(|level: Level, config: &GameConfig| {
                HangmanGame::with_answer(level, "CAT", config.lives)
            }),
        )
    }

    #[test]
    fn starts_at_menu() {
        let session = cat_session();
        assert_eq!(session.screen(), Screen::Menu);
        assert_eq!(session.prompt(), Some(MENU_PROMPT));
        assert!(session.game().is_none());
        assert!(session.is_running());
    }

    #[test]
    fn message_log_is_bounded() {
        let mut session = cat_session();
        for _ in 0..(MESSAGE_LOG_CAPACITY + 3) {
            session.handle_line(LineEvent::Submitted("9".into()));
        }
        assert_eq!(session.messages().len(), MESSAGE_LOG_CAPACITY);
        assert!(session.messages().iter().all(|m| m == INVALID_CHOICE));
    }

    #[test]
    fn ceil_secs_rounds_up() {
        assert_eq!(ceil_secs(Duration::from_millis(14_001)), 15);
        assert_eq!(ceil_secs(Duration::from_secs(15)), 15);
        assert_eq!(ceil_secs(Duration::ZERO), 0);
    }

    #[test]
    fn seconds_left_only_while_playing() {
        let mut session = cat_session();
        assert_eq!(session.seconds_left(), None);

        session.handle_line(LineEvent::Submitted("1".into()));
        let left = session.seconds_left().unwrap();
        assert!((14..=15).contains(&left));
    }
}
