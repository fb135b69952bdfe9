//! Single-line prompt editor.
//!
//! Stack-only: the buffer holds at most [`MAX_INPUT_LEN`] characters and
//! extra keystrokes are dropped.

use arrayvec::ArrayVec;

use crate::map::PromptKey;
use crate::types::MAX_INPUT_LEN;

/// A finished prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Enter was pressed; the text is trimmed of surrounding whitespace.
    Submitted(String),
    Interrupted,
}

#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buf: ArrayVec<char, MAX_INPUT_LEN>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key. Returns an event when the line is finished.
    pub fn handle(&mut self, key: PromptKey) -> Option<LineEvent> {
        match key {
            PromptKey::Char(c) => {
                if !c.is_control() {
                    // Full buffer: drop the keystroke.
                    let _ = self.buf.try_push(c);
                }
                None
            }
            PromptKey::Backspace => {
                self.buf.pop();
                None
            }
            PromptKey::Clear => {
                self.buf.clear();
                None
            }
            PromptKey::Submit => {
                let line = self.text().trim().to_string();
                self.buf.clear();
                Some(LineEvent::Submitted(line))
            }
            PromptKey::Interrupt => {
                self.buf.clear();
                Some(LineEvent::Interrupted)
            }
        }
    }

    /// Current (unsubmitted) text.
    pub fn text(&self) -> String {
        self.buf.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(editor: &mut LineEditor, s: &str) {
        for c in s.chars() {
            assert_eq!(editor.handle(PromptKey::Char(c)), None);
        }
    }

    #[test]
    fn submit_returns_trimmed_line_and_resets() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "  a ");
        assert_eq!(editor.text(), "  a ");

        assert_eq!(
            editor.handle(PromptKey::Submit),
            Some(LineEvent::Submitted("a".into()))
        );
        assert!(editor.is_empty());
    }

    #[test]
    fn submit_on_empty_line_yields_empty_string() {
        let mut editor = LineEditor::new();
        assert_eq!(
            editor.handle(PromptKey::Submit),
            Some(LineEvent::Submitted(String::new()))
        );
    }

    #[test]
    fn backspace_and_clear() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "abc");
        editor.handle(PromptKey::Backspace);
        assert_eq!(editor.text(), "ab");

        editor.handle(PromptKey::Clear);
        assert!(editor.is_empty());

        // Backspace on an empty line is harmless.
        editor.handle(PromptKey::Backspace);
        assert_eq!(editor.len(), 0);
    }

    #[test]
    fn interrupt_discards_text() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "quit");
        assert_eq!(
            editor.handle(PromptKey::Interrupt),
            Some(LineEvent::Interrupted)
        );
        assert!(editor.is_empty());
    }

    #[test]
    fn input_is_capped() {
        let mut editor = LineEditor::new();
        for _ in 0..(MAX_INPUT_LEN + 10) {
            editor.handle(PromptKey::Char('x'));
        }
        assert_eq!(editor.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut editor = LineEditor::new();
        editor.handle(PromptKey::Char('\t'));
        editor.handle(PromptKey::Char('\u{7}'));
        assert!(editor.is_empty());
    }
}
