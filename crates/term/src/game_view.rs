//! GameView: maps console screens into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::gallows::{gallows_lines, gallows_stage};
use crate::types::{Level, MESSAGE_LOG_CAPACITY};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// An input prompt and what has been typed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub label: &'a str,
    pub input: &'a str,
}

/// Everything needed to draw one screen.
#[derive(Debug, Clone, Copy)]
pub enum ScreenView<'a> {
    Menu {
        messages: &'a [String],
        prompt: Prompt<'a>,
    },
    Game {
        snapshot: &'a GameSnapshot,
        seconds_left: Option<u64>,
        messages: &'a [String],
        prompt: Prompt<'a>,
    },
}

const MENU_RULE_WIDTH: u16 = 50;
const GALLOWS_TOP: u16 = 4;
const PANEL_OFFSET: u16 = 14;
const MESSAGES_TOP: u16 = 12;

const TITLE: CellStyle = CellStyle::fg(Rgb::new(250, 210, 90)).bold();
const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const MUTED: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150)).dim();
const WORD: CellStyle = CellStyle::fg(Rgb::new(120, 200, 255)).bold();
const GOOD: CellStyle = CellStyle::fg(Rgb::new(110, 220, 120));
const WARN: CellStyle = CellStyle::fg(Rgb::new(240, 200, 80));
const BAD: CellStyle = CellStyle::fg(Rgb::new(235, 90, 80));

/// A lightweight terminal renderer for the console screens.
pub struct GameView {
    /// Left margin in columns.
    margin_x: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { margin_x: 2 }
    }
}

impl GameView {
    pub fn new(margin_x: u16) -> Self {
        Self { margin_x }
    }

    pub fn render(&self, screen: &ScreenView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, &mut fb);
        fb
    }

    /// Render into an existing framebuffer (which keeps its size).
    pub fn render_into(&self, screen: &ScreenView<'_>, fb: &mut FrameBuffer) {
        match *screen {
            ScreenView::Menu { messages, prompt } => {
                let prompt_y = self.draw_menu(fb, messages);
                self.draw_prompt(fb, prompt_y, prompt);
            }
            ScreenView::Game {
                snapshot,
                seconds_left,
                messages,
                prompt,
            } => {
                let prompt_y = self.draw_game(fb, snapshot, seconds_left, messages);
                self.draw_prompt(fb, prompt_y, prompt);
            }
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, messages: &[String]) -> u16 {
        let rule_w = MENU_RULE_WIDTH.min(fb.width().saturating_sub(self.margin_x));
        let rule = "=".repeat(usize::from(rule_w));
        let x = self.margin_x;

        fb.put_str(x, 0, &rule, MUTED);
        let title = "WELCOME TO HANGMAN GAME";
        let title_x = x + rule_w.saturating_sub(title.len() as u16) / 2;
        fb.put_str(title_x, 1, title, TITLE);
        fb.put_str(x, 2, &rule, MUTED);

        let mut y = 3;
        for (i, level) in Level::ALL.iter().enumerate() {
            let entry = format!("{}. {} Level ({})", i + 1, level.title(), level.noun());
            fb.put_str(x, y, &entry, TEXT);
            y += 1;
        }
        fb.put_str(x, y, &format!("{}. Quit Game", Level::ALL.len() + 1), TEXT);
        y += 1;
        fb.put_str(x, y, &rule, MUTED);

        self.draw_messages(fb, y + 2, messages)
    }

    fn draw_game(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        seconds_left: Option<u64>,
        messages: &[String],
    ) -> u16 {
        let x = self.margin_x;

        fb.hline(0, '-', MUTED);
        fb.put_centered(0, " HANGMAN ", TITLE);

        fb.put_str(x, 2, &format!("Level: {}", snap.level.title()), TEXT);
        fb.put_str(
            x + 22,
            2,
            &format!("Lives: {}/{}", snap.lives, snap.max_lives),
            lives_style(snap.lives, snap.max_lives),
        );
        if let Some(secs) = seconds_left {
            let style = if secs <= 5 { BAD } else { TEXT };
            fb.put_str(x + 38, 2, &format!("Time: {secs:>2}s"), style);
        }

        let stage = gallows_stage(snap.lives_lost(), snap.max_lives);
        for (dy, line) in gallows_lines(stage).iter().enumerate() {
            fb.put_str(x, GALLOWS_TOP + dy as u16, line, TEXT);
        }

        let px = x + PANEL_OFFSET;
        fb.put_str(px, GALLOWS_TOP + 1, "Word/Phrase: ", TEXT);
        fb.put_str(px + 13, GALLOWS_TOP + 1, &snap.display, WORD);

        if !snap.guessed_letters.is_empty() {
            fb.put_str(
                px,
                GALLOWS_TOP + 3,
                &format!("Guessed letters: {}", snap.guessed_list()),
                TEXT,
            );
        }
        if !snap.incorrect_guesses.is_empty() {
            fb.put_str(
                px,
                GALLOWS_TOP + 4,
                &format!("Misses: {}", snap.incorrect_list()),
                BAD,
            );
        }

        if snap.game_over {
            let (banner, style) = if snap.won {
                ("YOU WON!", GOOD)
            } else {
                ("GAME OVER", BAD)
            };
            fb.put_str(px, GALLOWS_TOP + 6, banner, style.bold());
            if let Some(answer) = &snap.answer {
                fb.put_str(px + 12, GALLOWS_TOP + 6, &format!("Answer: {answer}"), TEXT);
            }
        }

        fb.hline(MESSAGES_TOP - 1, '-', MUTED);
        self.draw_messages(fb, MESSAGES_TOP, messages)
    }

    /// Draws the message log and returns the prompt row.
    fn draw_messages(&self, fb: &mut FrameBuffer, top: u16, messages: &[String]) -> u16 {
        let skip = messages.len().saturating_sub(MESSAGE_LOG_CAPACITY);
        for (dy, message) in messages.iter().skip(skip).enumerate() {
            fb.put_str(self.margin_x, top + dy as u16, message, TEXT);
        }

        let below_log = top + MESSAGE_LOG_CAPACITY as u16 + 1;
        fb.height().saturating_sub(1).max(below_log)
    }

    fn draw_prompt(&self, fb: &mut FrameBuffer, y: u16, prompt: Prompt<'_>) {
        let x = self.margin_x;
        fb.put_str(x, y, prompt.label, TITLE);
        let input_x = x + prompt.label.chars().count() as u16;
        fb.put_str(input_x, y, prompt.input, TEXT);
        let cursor_x = input_x + prompt.input.chars().count() as u16;
        fb.put_str(cursor_x, y, "█", MUTED);
    }
}

fn lives_style(lives: u32, max_lives: u32) -> CellStyle {
    // Thirds: green while more than two thirds remain, red in the last third.
    let scaled = u64::from(lives) * 3;
    let max = u64::from(max_lives);
    if scaled > max * 2 {
        GOOD
    } else if scaled > max {
        WARN
    } else {
        BAD
    }
}
