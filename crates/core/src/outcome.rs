//! Result of a single guess.

use std::fmt;

/// What happened when a guess was submitted.
///
/// Every rule violation is a normal value here; nothing about a guess is ever
/// an error. [`accepted`](GuessOutcome::accepted) and
/// [`message`](GuessOutcome::message) give the `(accepted, message)` pair the
/// console shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The game had already ended; nothing changed.
    GameAlreadyOver,
    /// Not a single letter, or a letter guessed before; nothing changed.
    Invalid,
    /// The letter is in the answer and blanks remain.
    Hit { letter: char },
    /// The letter completed the answer.
    Won,
    /// The letter is not in the answer and lives remain.
    Miss { letter: char, lives_left: u32 },
    /// The letter was not in the answer and used up the last life.
    Lost { answer: String },
}

impl GuessOutcome {
    /// True when the guessed letter is part of the answer.
    pub fn accepted(&self) -> bool {
        matches!(self, GuessOutcome::Hit { .. } | GuessOutcome::Won)
    }

    /// True when this guess finished the game.
    pub fn ends_game(&self) -> bool {
        matches!(self, GuessOutcome::Won | GuessOutcome::Lost { .. })
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::GameAlreadyOver => f.write_str("Game is already over!"),
            GuessOutcome::Invalid => f.write_str("Invalid guess or already guessed!"),
            GuessOutcome::Hit { letter } => {
                write!(f, "Good guess! '{letter}' is in the answer.")
            }
            GuessOutcome::Won => f.write_str("Congratulations! You won!"),
            GuessOutcome::Miss { letter, lives_left } => {
                write!(f, "Sorry, '{letter}' is not in the answer. Lives: {lives_left}")
            }
            GuessOutcome::Lost { answer } => write!(f, "Game Over! The answer was: {answer}"),
        }
    }
}
