//! Input event types and key-binding matching.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl InputEvent {
    /// Get the character if this is an unmodified character input.
    pub fn char(&self) -> Option<char> {
        if self.ctrl || self.alt {
            return None;
        }
        match self.key {
            Key::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Check if this matches a key binding string (e.g. "q", "Enter",
    /// "Ctrl+c"). Named keys match case-insensitively; single characters
    /// match both cases.
    pub fn matches(&self, binding: &str) -> bool {
        let mut expected_ctrl = false;
        let mut expected_alt = false;
        let mut expected_key = "";

        for part in binding.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" => expected_ctrl = true,
                "alt" => expected_alt = true,
                _ => expected_key = part,
            }
        }

        if self.ctrl != expected_ctrl || self.alt != expected_alt {
            return false;
        }

        match expected_key.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            "tab" => self.key == Key::Tab,
            "up" => self.key == Key::Up,
            "down" => self.key == Key::Down,
            "left" => self.key == Key::Left,
            "right" => self.key == Key::Right,
            "home" => self.key == Key::Home,
            "end" => self.key == Key::End,
            s if s.chars().count() == 1 => match (s.chars().next(), self.key) {
                (Some(expected), Key::Char(actual)) => {
                    actual == expected || actual == expected.to_ascii_uppercase()
                }
                _ => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::from(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_char_binding_matches_both_cases() {
        assert!(key(KeyCode::Char('q')).matches("q"));
        assert!(key(KeyCode::Char('Q')).matches("q"));
        assert!(!key(KeyCode::Char('x')).matches("q"));
    }

    #[test]
    fn test_named_key_bindings() {
        assert!(key(KeyCode::Enter).matches("Enter"));
        assert!(key(KeyCode::Esc).matches("esc"));
        assert!(key(KeyCode::Esc).matches("Escape"));
        assert!(!key(KeyCode::Enter).matches("esc"));
    }

    #[test]
    fn test_modifier_bindings() {
        let ctrl_c = InputEvent::from(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(ctrl_c.matches("Ctrl+c"));
        assert!(!ctrl_c.matches("c"));
        assert!(!key(KeyCode::Char('c')).matches("Ctrl+c"));
    }

    #[test]
    fn test_char_extraction_skips_modified() {
        assert_eq!(key(KeyCode::Char('a')).char(), Some('a'));
        let ctrl_a = InputEvent::from(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(ctrl_a.char(), None);
        assert_eq!(key(KeyCode::Enter).char(), None);
    }
}
