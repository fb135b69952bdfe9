//! Core game logic module - the Hangman engine
//!
//! This crate holds the game rules and nothing else: answer selection, guess
//! validation, life tracking, win/loss detection, and the per-guess countdown.
//! It has no dependency on terminal I/O, so every rule is unit-testable.
//!
//! # Module Structure
//!
//! - [`words`]: fixed answer lists per level
//! - [`game_state`]: [`HangmanGame`], the state of one round
//! - [`outcome`]: [`GuessOutcome`], what a guess did
//! - [`snapshot`]: [`GameSnapshot`], an owned view for renderers
//! - [`timer`]: [`Countdown`], the one-shot background timer
//! - [`config`]: [`GameConfig`], environment-driven settings
//!
//! # Game Rules
//!
//! - One answer is drawn per game: a word at Basic, a phrase at Intermediate
//! - A guess is one letter, case-insensitive, never repeated
//! - A wrong letter costs one life; so does letting the countdown run out
//! - The game is won when every letter is revealed and lost at zero lives
//! - Once over, the game never changes again
//!
//! # Example
//!
//! ```
//! use hangman_core::{GuessOutcome, HangmanGame};
//! use hangman_types::Level;
//!
//! let mut game = HangmanGame::with_answer(Level::Basic, "CAT", 6);
//!
//! assert_eq!(game.make_guess("c"), GuessOutcome::Hit { letter: 'C' });
//! assert_eq!(game.render_display(), "C__");
//!
//! // The answer stays hidden until the game ends.
//! assert_eq!(game.snapshot().answer, None);
//!
//! game.make_guess("a");
//! assert_eq!(game.make_guess("t"), GuessOutcome::Won);
//! assert_eq!(game.snapshot().answer.as_deref(), Some("CAT"));
//! ```
//!
//! # Timing
//!
//! Call [`HangmanGame::start_timer`] when a guess is requested and
//! [`HangmanGame::stop_timer`] as soon as it arrives. The countdown applies its
//! penalty from a background thread, so callers poll
//! [`HangmanGame::is_time_expired`] to find out.

pub mod config;
pub mod game_state;
pub mod outcome;
pub mod snapshot;
pub mod timer;
pub mod words;

pub use hangman_types as types;

pub use config::{ConfigError, GameConfig};
pub use game_state::HangmanGame;
pub use outcome::GuessOutcome;
pub use snapshot::GameSnapshot;
pub use timer::Countdown;
pub use words::{pick_answer, vocabulary, BASIC_WORDS, INTERMEDIATE_PHRASES};
