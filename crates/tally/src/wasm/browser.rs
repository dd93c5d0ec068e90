//! Real browser bindings (`wasm` feature).
//!
//! The JS glue forwards button clicks and `keydown` events here and
//! renders the JSON readouts that come back.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::Readout;

use super::dom::DomEvent;
use super::keypad::event_for_key;
use super::shell::DomCalculator;

/// Browser-facing calculator.
///
/// Every method returns the readout as JSON
/// (`{"primary": ..., "secondary": ..., "error": ...}`).
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    shell: DomCalculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates the calculator and installs the panic hook.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        console::log_1(&"calculator ready".into());
        Self {
            shell: DomCalculator::new(),
        }
    }

    /// Handles a button click, identified by element id.
    pub fn click(&mut self, element_id: &str) -> String {
        to_json(&self.shell.dispatch(&DomEvent::click(element_id)))
    }

    /// Handles a key press, identified by its `KeyboardEvent.key` value.
    pub fn key(&mut self, key: &str) -> String {
        to_json(&self.shell.dispatch(&DomEvent::key_press(key)))
    }

    /// Current readout without feeding input.
    #[must_use]
    pub fn readout(&self) -> String {
        to_json(&self.shell.readout())
    }

    /// True when the calculator handles this key; the host should call
    /// `preventDefault` for exactly these.
    #[must_use]
    pub fn captures_key(&self, key: &str) -> bool {
        event_for_key(key).is_some()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json(readout: &Readout) -> String {
    serde_json::to_string(readout).unwrap_or_default()
}
