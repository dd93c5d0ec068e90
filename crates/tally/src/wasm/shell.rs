//! Browser shell: wires clicks and keydowns to engine transitions.
//!
//! The shell owns a [`MockDom`] holding the two displays and every
//! keypad button, so the full event-to-transition dispatch, display
//! writes and class toggling run natively under test. The `wasm`
//! feature layers the real browser entry point on top.

use tracing::debug;

use crate::core::{Engine, InputEvent, Readout};

use super::dom::{DomElement, DomEvent, MockDom};
use super::keypad::{button_id, event_for_key, BrowserKeypad, ButtonDef};

/// Element id of the primary display.
pub const CURRENT_OPERAND_ID: &str = "current-operand";
/// Element id of the secondary display.
pub const PREVIOUS_OPERAND_ID: &str = "previous-operand";
/// Class present on the primary display while the error marker is shown.
pub const ERROR_CLASS: &str = "error";
/// Class present on the pending operator's button.
pub const ACTIVE_CLASS: &str = "active";

/// The calculator as the browser sees it: displays, buttons, and the
/// dispatch table between them and the engine.
#[derive(Debug, Clone)]
pub struct DomCalculator {
    engine: Engine,
    dom: MockDom,
    keypad: BrowserKeypad,
}

impl Default for DomCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl DomCalculator {
    /// Builds the display elements and keypad buttons.
    #[must_use]
    pub fn new() -> Self {
        let mut dom = MockDom::new();
        dom.insert(
            DomElement::new("div")
                .with_id(PREVIOUS_OPERAND_ID)
                .with_class("previous-operand"),
        );
        dom.insert(
            DomElement::new("div")
                .with_id(CURRENT_OPERAND_ID)
                .with_class("current-operand")
                .with_text("0"),
        );
        let keypad = BrowserKeypad::new();
        for def in keypad.buttons() {
            dom.insert(button_element(def));
        }
        Self {
            engine: Engine::new(),
            dom,
            keypad,
        }
    }

    /// The observable DOM.
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The keypad definitions.
    #[must_use]
    pub fn keypad(&self) -> &BrowserKeypad {
        &self.keypad
    }

    /// Routes a DOM event to the matching engine transition. Events
    /// targeting nothing the calculator handles are no-ops.
    pub fn dispatch(&mut self, event: &DomEvent) -> Readout {
        let input = match event {
            DomEvent::Click { element_id } => self.keypad.event_for_element(element_id),
            DomEvent::KeyPress { key } => event_for_key(key),
        };
        match input {
            Some(input) => self.press(input),
            None => self.engine.readout(),
        }
    }

    /// Applies one input event and mirrors the new state into the DOM.
    pub fn press(&mut self, input: InputEvent) -> Readout {
        let readout = self.engine.apply(input);
        debug!(?input, primary = %readout.primary, "transition");
        self.sync(&readout);
        readout
    }

    /// Current readout, without feeding input.
    #[must_use]
    pub fn readout(&self) -> Readout {
        self.engine.readout()
    }

    /// Text currently shown on the primary display element.
    #[must_use]
    pub fn primary_text(&self) -> &str {
        self.dom.text(CURRENT_OPERAND_ID).unwrap_or("")
    }

    /// Text currently shown on the secondary display element.
    #[must_use]
    pub fn secondary_text(&self) -> &str {
        self.dom.text(PREVIOUS_OPERAND_ID).unwrap_or("")
    }

    fn sync(&mut self, readout: &Readout) {
        self.dom.set_text(CURRENT_OPERAND_ID, &readout.primary);
        self.dom.set_text(PREVIOUS_OPERAND_ID, &readout.secondary);
        if readout.error {
            self.dom.add_class(CURRENT_OPERAND_ID, ERROR_CLASS);
        } else {
            self.dom.remove_class(CURRENT_OPERAND_ID, ERROR_CLASS);
        }
        self.sync_operator_highlight();
    }

    /// Highlights the pending operator's button. The highlight clears as
    /// soon as the second operand is being entered.
    fn sync_operator_highlight(&mut self) {
        let active = if self.engine.next_input_resets() {
            self.engine.pending_op()
        } else {
            None
        };
        for def in self.keypad.buttons() {
            if matches!(def.event, InputEvent::Operator(_)) {
                self.dom.remove_class(&def.id, ACTIVE_CLASS);
            }
        }
        if let Some(op) = active {
            self.dom
                .add_class(&button_id(InputEvent::Operator(op)), ACTIVE_CLASS);
        }
    }
}

fn button_element(def: &ButtonDef) -> DomElement {
    let element = DomElement::new("button")
        .with_id(&def.id)
        .with_text(&def.label);
    match def.event {
        InputEvent::Digit(d) => element
            .with_class("digit")
            .with_attr("data-digit", &d.to_string()),
        InputEvent::Operator(op) => element
            .with_class("operator")
            .with_attr("data-operator", &op.symbol().to_string()),
        InputEvent::Decimal => element.with_attr("data-action", "decimal"),
        InputEvent::Equals => element.with_attr("data-action", "equals"),
        InputEvent::Clear => element.with_attr("data-action", "clear"),
        InputEvent::Backspace => element.with_attr("data-action", "backspace"),
        InputEvent::Percent => element.with_attr("data-action", "percent"),
    }
}
