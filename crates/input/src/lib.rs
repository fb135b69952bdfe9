//! Terminal input module (prompt-facing).
//!
//! Maps `crossterm` key events into [`PromptKey`]s, collects them into lines
//! with a bounded [`LineEditor`], and interprets the few commands the console
//! understands (menu choices, `quit`, play-again answers).

pub mod line;
pub mod map;
pub mod menu;

pub use hangman_types as types;

pub use line::{LineEditor, LineEvent};
pub use map::{is_interrupt, map_key_event, PromptKey};
pub use menu::{is_affirmative, is_quit_command, parse_menu_choice, MenuChoice};
