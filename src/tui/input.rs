//! Key decoding for the form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Action;

/// Translate a raw key event into an [`Action`].
///
/// `alert_open` switches to the modal mapping where only dismiss and quit
/// mean anything.
pub fn map_key(key: KeyEvent, alert_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissAlert),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Type(c))
        }
        _ => None,
    }
}
