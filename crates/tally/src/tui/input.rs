//! Keyboard capture policy: crossterm key events to calculator input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::InputEvent;

/// What a key press should do to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an input event to the engine
    Input(InputEvent),
    /// Leave the application
    Quit,
    /// Ignored key
    None,
}

/// Maps terminal key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => InputEvent::from_char(c).map_or(KeyAction::None, KeyAction::Input),
            KeyCode::Enter => KeyAction::Input(InputEvent::Equals),
            KeyCode::Esc => KeyAction::Input(InputEvent::Clear),
            KeyCode::Backspace => KeyAction::Input(InputEvent::Backspace),
            _ => KeyAction::None,
        }
    }
}
