//! Vocabulary - the fixed answer lists for each level.
//!
//! Answers contain only uppercase ASCII letters, plus single spaces between
//! the words of a phrase.

use rand::Rng;

use crate::types::Level;

/// Single words drawn for [`Level::Basic`].
pub static BASIC_WORDS: [&str; 10] = [
    "PYTHON",
    "COMPUTER",
    "PROGRAMMING",
    "SOFTWARE",
    "TESTING",
    "DEVELOPMENT",
    "ALGORITHM",
    "FUNCTION",
    "VARIABLE",
    "OBJECT",
];

/// Multi-word phrases drawn for [`Level::Intermediate`].
pub static INTERMEDIATE_PHRASES: [&str; 5] = [
    "TEST DRIVEN DEVELOPMENT",
    "OBJECT ORIENTED PROGRAMMING",
    "SOFTWARE ENGINEERING PRINCIPLES",
    "DATABASE MANAGEMENT SYSTEM",
    "USER INTERFACE DESIGN",
];

/// The answer list for a level.
pub fn vocabulary(level: Level) -> &'static [&'static str] {
    match level {
        Level::Basic => &BASIC_WORDS,
        Level::Intermediate => &INTERMEDIATE_PHRASES,
    }
}

/// Draw one answer for `level`, uniformly.
pub fn pick_answer<R: Rng + ?Sized>(level: Level, rng: &mut R) -> &'static str {
    let words = vocabulary(level);
    words[rng.gen_range(0..words.len())]
}
