//! Terminal application state: the engine plus a quit flag.

use tracing::trace;

use crate::core::{Engine, InputEvent, Readout};

use super::input::KeyAction;

/// Calculator application state for the terminal frontend.
#[derive(Debug, Clone)]
pub struct CalculatorApp {
    engine: Engine,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new app in the cleared phase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            should_quit: false,
        }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current primary display text.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.engine.display()
    }

    /// Current secondary display text.
    #[must_use]
    pub fn secondary(&self) -> &str {
        self.engine.previous()
    }

    /// Current readout without feeding input.
    #[must_use]
    pub fn readout(&self) -> Readout {
        self.engine.readout()
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a key action.
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(event) => {
                self.press(event);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Applies one input event to the engine.
    pub fn press(&mut self, event: InputEvent) -> Readout {
        let readout = self.engine.apply(event);
        trace!(?event, primary = %readout.primary, "transition");
        readout
    }
}
