use serde::Serialize;

use crate::types::Level;

/// Immutable, owned view of a game for rendering and logging.
///
/// `answer` stays `None` until the game is over so a renderer can never leak
/// it early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub level: Level,
    pub display: String,
    pub lives: u32,
    pub max_lives: u32,
    pub guessed_letters: Vec<char>,
    pub incorrect_guesses: Vec<char>,
    pub game_over: bool,
    pub won: bool,
    pub answer: Option<String>,
    pub time_expired: bool,
    pub time_limit_secs: u64,
}

impl GameSnapshot {
    pub fn lives_lost(&self) -> u32 {
        self.max_lives.saturating_sub(self.lives)
    }

    /// Guessed letters joined for display, e.g. `"A, E, T"`.
    pub fn guessed_list(&self) -> String {
        join_letters(&self.guessed_letters)
    }

    pub fn incorrect_list(&self) -> String {
        join_letters(&self.incorrect_guesses)
    }
}

fn join_letters(letters: &[char]) -> String {
    let mut out = String::with_capacity(letters.len() * 3);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push(*letter);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap() -> GameSnapshot {
        GameSnapshot {
            level: Level::Basic,
            display: "C__".into(),
            lives: 4,
            max_lives: 6,
            guessed_letters: vec!['C', 'X', 'Z'],
            incorrect_guesses: vec!['X', 'Z'],
            game_over: false,
            won: false,
            answer: None,
            time_expired: false,
            time_limit_secs: 15,
        }
    }

    #[test]
    fn letter_lists_are_comma_joined() {
        let s = snap();
        assert_eq!(s.guessed_list(), "C, X, Z");
        assert_eq!(s.incorrect_list(), "X, Z");
    }

    #[test]
    fn empty_letter_list_is_empty_string() {
        let mut s = snap();
        s.guessed_letters.clear();
        assert_eq!(s.guessed_list(), "");
    }

    #[test]
    fn lives_lost_is_difference() {
        assert_eq!(snap().lives_lost(), 2);
    }

    #[test]
    fn withheld_answer_serializes_as_null() {
        let value = serde_json::to_value(snap()).unwrap();
        assert!(value["answer"].is_null());
        assert_eq!(value["level"], "basic");
        assert_eq!(value["guessed_letters"], serde_json::json!(["C", "X", "Z"]));
    }
}
