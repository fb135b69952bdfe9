//! Terminal rendering for the console game.
//!
//! Screens are drawn into a plain framebuffer by [`GameView`] (pure, testable)
//! and flushed by [`TerminalRenderer`] (crossterm, raw mode).

pub mod fb;
pub mod gallows;
pub mod game_view;
pub mod renderer;

pub use hangman_core as core;
pub use hangman_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use gallows::{gallows_lines, gallows_stage, GALLOWS_STAGES};
pub use game_view::{GameView, Prompt, ScreenView, Viewport};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
