//! Core types module - shared data structures and constants
//!
//! This module defines the small set of plain types shared by the engine, the
//! session state machine, and the terminal renderer. Nothing here performs I/O.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_LIVES` | 6 | Incorrect guesses (or timeouts) allowed before a loss |
//! | `TIME_LIMIT_SECS` | 15 | Countdown for each pending guess |
//! | `TICK_MS` | 100 | UI poll interval while waiting for input |
//! | `MAX_INPUT_LEN` | 32 | Characters kept by the prompt line editor |
//! | `MESSAGE_LOG_CAPACITY` | 6 | Feedback lines kept for display |
//!
//! # Examples
//!
//! ```
//! use hangman_types::{Level, DEFAULT_LIVES};
//!
//! let level: Level = " Intermediate ".parse().unwrap();
//! assert_eq!(level, Level::Intermediate);
//! assert_eq!(level.title(), "Intermediate");
//! assert_eq!(DEFAULT_LIVES, 6);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Starting life count for a new game.
pub const DEFAULT_LIVES: u32 = 6;

/// Seconds allowed for each guess before the countdown costs a life.
pub const TIME_LIMIT_SECS: u64 = 15;

/// Placeholder shown for a letter that has not been guessed yet.
pub const BLANK: char = '_';

/// Event poll interval for the interactive loop (milliseconds).
pub const TICK_MS: u64 = 100;

/// Maximum characters buffered by a prompt.
pub const MAX_INPUT_LEN: usize = 32;

/// Number of feedback lines a session keeps around for rendering.
pub const MESSAGE_LOG_CAPACITY: usize = 6;

/// Difficulty tier. Selects which vocabulary an answer is drawn from.
///
/// - **Basic**: single words
/// - **Intermediate**: multi-word phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basic,
    Intermediate,
}

impl Level {
    pub const ALL: [Level; 2] = [Level::Basic, Level::Intermediate];

    /// Lowercase identifier, as used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Basic => "basic",
            Level::Intermediate => "intermediate",
        }
    }

    /// Capitalized name for display.
    pub fn title(&self) -> &'static str {
        match self {
            Level::Basic => "Basic",
            Level::Intermediate => "Intermediate",
        }
    }

    /// What the player is guessing at this level.
    pub fn noun(&self) -> &'static str {
        match self {
            Level::Basic => "Words",
            Level::Intermediate => "Phrases",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level {0:?} (expected \"basic\" or \"intermediate\")")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parse a level name (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Level::Basic),
            "intermediate" => Ok(Level::Intermediate),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("basic".parse::<Level>(), Ok(Level::Basic));
        assert_eq!("BASIC".parse::<Level>(), Ok(Level::Basic));
        assert_eq!("Intermediate".parse::<Level>(), Ok(Level::Intermediate));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "expert".parse::<Level>().unwrap_err();
        assert_eq!(err, ParseLevelError("expert".to_string()));
        assert!(err.to_string().contains("expert"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn titles_are_capitalized() {
        assert_eq!(Level::Basic.title(), "Basic");
        assert_eq!(Level::Intermediate.title(), "Intermediate");
    }

    #[test]
    fn default_tuning() {
        assert_eq!(DEFAULT_LIVES, 6);
        assert_eq!(TIME_LIMIT_SECS, 15);
        assert_eq!(BLANK, '_');
    }
}
