//! Interpretation of submitted lines: menu choices and yes/no answers.

use crate::types::Level;

/// Main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Level),
    Quit,
}

/// `1` = Basic, `2` = Intermediate, `3` = Quit. Anything else is `None`.
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Play(Level::Basic)),
        "2" => Some(MenuChoice::Play(Level::Intermediate)),
        "3" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// `y` or `yes`, any case.
pub fn is_affirmative(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes")
}

/// The guess `quit` (any case) abandons the current game.
pub fn is_quit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("quit")
}
