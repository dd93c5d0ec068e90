//! Scenario drivers: the same input scripts run against any frontend.
//!
//! A driver hides which surface is being exercised (the bare engine,
//! the browser shell's click path, or the terminal app), so each
//! acceptance scenario is written once and replayed everywhere.

use crate::core::{Engine, InputEvent, Readout};
use crate::wasm::keypad::button_id;
use crate::wasm::{DomCalculator, DomEvent};

/// Common interface every calculator surface implements.
pub trait CalculatorDriver {
    /// Feeds one input event and returns the resulting readout.
    fn press(&mut self, event: InputEvent) -> Readout;

    /// Returns the current readout without feeding input.
    fn readout(&self) -> Readout;

    /// Current primary display text.
    fn primary(&self) -> String {
        self.readout().primary
    }

    /// Current secondary display text.
    fn secondary(&self) -> String {
        self.readout().secondary
    }

    /// Replays a script of key characters: digits, `.`, `+-*/`, `=`,
    /// plus `C` (clear), `<` (backspace) and `%`. Unknown characters are
    /// skipped.
    fn run_script(&mut self, script: &str) -> Readout {
        let mut last = self.readout();
        for c in script.chars() {
            if let Some(event) = script_event(c) {
                last = self.press(event);
            }
        }
        last
    }
}

/// Maps one script character to an input event.
#[must_use]
pub fn script_event(c: char) -> Option<InputEvent> {
    match c {
        'C' => Some(InputEvent::Clear),
        '<' => Some(InputEvent::Backspace),
        _ => InputEvent::from_char(c),
    }
}

/// Driver over the bare engine.
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a driver over a fresh engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, event: InputEvent) -> Readout {
        self.engine.apply(event)
    }

    fn readout(&self) -> Readout {
        self.engine.readout()
    }
}

/// Driver over the browser shell. Events go in through the DOM click
/// path, so the dispatch table and display wiring are exercised too.
#[derive(Debug, Default)]
pub struct DomDriver {
    shell: DomCalculator,
}

impl DomDriver {
    /// Creates a driver over a fresh browser shell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shell: DomCalculator::new(),
        }
    }

    /// The underlying shell.
    #[must_use]
    pub fn shell(&self) -> &DomCalculator {
        &self.shell
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, event: InputEvent) -> Readout {
        let id = button_id(event);
        self.shell.dispatch(&DomEvent::click(&id))
    }

    fn readout(&self) -> Readout {
        self.shell.readout()
    }
}

#[cfg(feature = "tui")]
mod tui_driver {
    use super::{CalculatorDriver, InputEvent, Readout};
    use crate::tui::CalculatorApp;

    /// Driver over the terminal app.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver over a fresh terminal app.
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// The underlying app.
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) -> Readout {
            self.app.press(event)
        }

        fn readout(&self) -> Readout {
            self.app.readout()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

#[cfg(test)]
mod tests {
    use super::*;

    // ===== script_event tests =====

    #[test]
    fn test_script_event_mapping() {
        assert_eq!(script_event('C'), Some(InputEvent::Clear));
        assert_eq!(script_event('<'), Some(InputEvent::Backspace));
        assert_eq!(script_event('7'), Some(InputEvent::Digit(7)));
        assert_eq!(script_event('='), Some(InputEvent::Equals));
        assert_eq!(script_event(' '), None);
    }

    // ===== EngineDriver tests =====

    #[test]
    fn test_engine_driver_script() {
        let mut driver = EngineDriver::new();
        let readout = driver.run_script("3+4+5=");
        assert_eq!(readout.primary, "12");
    }

    #[test]
    fn test_engine_driver_empty_script() {
        let mut driver = EngineDriver::new();
        let readout = driver.run_script("");
        assert_eq!(readout.primary, "0");
    }

    #[test]
    fn test_engine_driver_skips_unknown_chars() {
        let mut driver = EngineDriver::new();
        let readout = driver.run_script("3 + 4 =");
        assert_eq!(readout.primary, "7");
    }

    // ===== DomDriver tests =====

    #[test]
    fn test_dom_driver_script() {
        let mut driver = DomDriver::new();
        let readout = driver.run_script("3+4+5=");
        assert_eq!(readout.primary, "12");
        // The shell's DOM saw the same result
        assert_eq!(driver.shell().primary_text(), "12");
    }

    #[test]
    fn test_drivers_agree() {
        let script = "1/3*3=";
        let mut engine = EngineDriver::new();
        let mut dom = DomDriver::new();
        assert_eq!(engine.run_script(script), dom.run_script(script));
    }

    // ===== TuiDriver tests =====

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_driver_script() {
        let mut driver = TuiDriver::new();
        let readout = driver.run_script("50%");
        assert_eq!(readout.primary, "0.5");
    }
}
