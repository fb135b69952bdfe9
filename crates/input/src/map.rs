//! Key mapping from terminal events to prompt keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editing keys understood by a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Char(char),
    Backspace,
    /// Discard the whole line.
    Clear,
    Submit,
    /// User abort (Ctrl-C / Ctrl-D).
    Interrupt,
}

/// Map a key press to a prompt key. Unmapped keys return `None`.
pub fn map_key_event(key: KeyEvent) -> Option<PromptKey> {
    if is_interrupt(key) {
        return Some(PromptKey::Interrupt);
    }

    match key.code {
        KeyCode::Enter => Some(PromptKey::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(PromptKey::Backspace),
        KeyCode::Esc => Some(PromptKey::Clear),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(PromptKey::Char(c))
        }
        _ => None,
    }
}

/// Ctrl-C and Ctrl-D abort the current prompt.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(
            key.code,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('d') | KeyCode::Char('D')
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(PromptKey::Submit)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(PromptKey::Backspace)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(PromptKey::Clear)
        );
    }

    #[test]
    fn test_characters_pass_through() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(PromptKey::Char('a'))
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(PromptKey::Char('A'))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(PromptKey::Char(' '))
        );
    }

    #[test]
    fn test_interrupt_keys() {
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(PromptKey::Interrupt)
        );
        assert!(is_interrupt(KeyEvent::new(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::F(1))), None);
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
    }
}
