use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Terminal keys reduced to what the transition tables care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputEvent {
    Quit,
    Interrupt,
    Back,
    Up,
    Down,
    Enter,
    Digit(u8),
    Other,
}

impl From<KeyEvent> for InputEvent {
    fn from(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Self::Interrupt,
                _ => Self::Other,
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
            KeyCode::Char('b') => Self::Back,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Enter => Self::Enter,
            KeyCode::Char(ch @ '1'..='9') => ch
                .to_digit(10)
                .map(|digit| Self::Digit(digit as u8))
                .unwrap_or(Self::Other),
            _ => Self::Other,
        }
    }
}
