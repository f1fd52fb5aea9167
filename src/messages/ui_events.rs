//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The roll button was activated
    Roll,

    // System
    Quit,
}

/// Convert a key event to a UiEvent
pub fn key_to_ui_event(key: KeyEvent) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => Some(UiEvent::Roll),
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        _ => None,
    }
}

/// Convert a mouse event to a UiEvent; a left click on the button rolls
pub fn mouse_to_ui_event(mouse: MouseEvent, roll_button: Rect) -> Option<UiEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if roll_button.contains(Position::new(mouse.column, mouse.row)) =>
        {
            Some(UiEvent::Roll)
        }
        _ => None,
    }
}
