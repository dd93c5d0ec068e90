//! Browser keypad: button definitions, element ids, and the keyboard map.
//!
//! Layout:
//! ```text
//! [ C ] [ ⌫ ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```

use crate::core::{InputEvent, Operator};

/// A single keypad button and where it sits in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDef {
    /// The input event this button fires
    pub event: InputEvent,
    /// The DOM element id for this button
    pub id: String,
    /// The on-screen label
    pub label: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl ButtonDef {
    /// Creates a button definition for an event at a grid position.
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize) -> Self {
        Self {
            event,
            id: button_id(event),
            label: event.label(),
            row,
            col,
        }
    }
}

/// Stable DOM element id for the button firing `event`.
#[must_use]
pub fn button_id(event: InputEvent) -> String {
    match event {
        InputEvent::Digit(d) => format!("btn-{d}"),
        InputEvent::Decimal => "btn-decimal".to_string(),
        InputEvent::Operator(op) => format!("btn-{}", op_name(op)),
        InputEvent::Equals => "btn-equals".to_string(),
        InputEvent::Clear => "btn-clear".to_string(),
        InputEvent::Backspace => "btn-backspace".to_string(),
        InputEvent::Percent => "btn-percent".to_string(),
    }
}

fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// The browser keypad: every button the shell materializes.
#[derive(Debug, Clone)]
pub struct BrowserKeypad {
    buttons: Vec<ButtonDef>,
}

impl Default for BrowserKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserKeypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C ⌫ % ÷
            ButtonDef::new(InputEvent::Clear, 0, 0),
            ButtonDef::new(InputEvent::Backspace, 0, 1),
            ButtonDef::new(InputEvent::Percent, 0, 2),
            ButtonDef::new(InputEvent::Operator(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            ButtonDef::new(InputEvent::Digit(7), 1, 0),
            ButtonDef::new(InputEvent::Digit(8), 1, 1),
            ButtonDef::new(InputEvent::Digit(9), 1, 2),
            ButtonDef::new(InputEvent::Operator(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 −
            ButtonDef::new(InputEvent::Digit(4), 2, 0),
            ButtonDef::new(InputEvent::Digit(5), 2, 1),
            ButtonDef::new(InputEvent::Digit(6), 2, 2),
            ButtonDef::new(InputEvent::Operator(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            ButtonDef::new(InputEvent::Digit(1), 3, 0),
            ButtonDef::new(InputEvent::Digit(2), 3, 1),
            ButtonDef::new(InputEvent::Digit(3), 3, 2),
            ButtonDef::new(InputEvent::Operator(Operator::Add), 3, 3),
            // Row 4: 0 . =  (short row)
            ButtonDef::new(InputEvent::Digit(0), 4, 0),
            ButtonDef::new(InputEvent::Decimal, 4, 1),
            ButtonDef::new(InputEvent::Equals, 4, 2),
        ];
        Self { buttons }
    }

    /// All button definitions.
    #[must_use]
    pub fn buttons(&self) -> &[ButtonDef] {
        &self.buttons
    }

    /// Number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Finds a button by its element id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// The input event a click on `id` should fire, if any.
    #[must_use]
    pub fn event_for_element(&self, id: &str) -> Option<InputEvent> {
        self.find(id).map(|b| b.event)
    }

    /// Finds a button by grid position. The last row is short, so this
    /// searches rather than indexing.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }
}

/// Maps a browser `KeyboardEvent.key` value to an input event.
///
/// This is the key-capture policy: exactly the keys the calculator
/// handles (and whose default action the host should suppress).
#[must_use]
pub fn event_for_key(key: &str) -> Option<InputEvent> {
    match key {
        "Enter" | "=" => Some(InputEvent::Equals),
        "Escape" => Some(InputEvent::Clear),
        "Backspace" => Some(InputEvent::Backspace),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => InputEvent::from_char(c),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== button_id tests =====

    #[test]
    fn test_button_ids() {
        assert_eq!(button_id(InputEvent::Digit(0)), "btn-0");
        assert_eq!(button_id(InputEvent::Digit(9)), "btn-9");
        assert_eq!(button_id(InputEvent::Decimal), "btn-decimal");
        assert_eq!(button_id(InputEvent::Operator(Operator::Add)), "btn-plus");
        assert_eq!(
            button_id(InputEvent::Operator(Operator::Divide)),
            "btn-divide"
        );
        assert_eq!(button_id(InputEvent::Equals), "btn-equals");
        assert_eq!(button_id(InputEvent::Clear), "btn-clear");
        assert_eq!(button_id(InputEvent::Backspace), "btn-backspace");
        assert_eq!(button_id(InputEvent::Percent), "btn-percent");
    }

    #[test]
    fn test_button_ids_are_unique() {
        let keypad = BrowserKeypad::new();
        let mut ids: Vec<_> = keypad.buttons().iter().map(|b| b.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), keypad.button_count());
    }

    // ===== Layout tests =====

    #[test]
    fn test_keypad_button_count() {
        assert_eq!(BrowserKeypad::new().button_count(), 19);
    }

    #[test]
    fn test_keypad_top_row() {
        let keypad = BrowserKeypad::new();
        assert_eq!(keypad.button_at(0, 0).unwrap().event, InputEvent::Clear);
        assert_eq!(keypad.button_at(0, 1).unwrap().event, InputEvent::Backspace);
        assert_eq!(keypad.button_at(0, 2).unwrap().event, InputEvent::Percent);
        assert_eq!(
            keypad.button_at(0, 3).unwrap().event,
            InputEvent::Operator(Operator::Divide)
        );
    }

    #[test]
    fn test_keypad_short_last_row() {
        let keypad = BrowserKeypad::new();
        assert_eq!(keypad.button_at(4, 0).unwrap().event, InputEvent::Digit(0));
        assert_eq!(keypad.button_at(4, 1).unwrap().event, InputEvent::Decimal);
        assert_eq!(keypad.button_at(4, 2).unwrap().event, InputEvent::Equals);
        assert!(keypad.button_at(4, 3).is_none());
    }

    #[test]
    fn test_keypad_all_digits_present() {
        let keypad = BrowserKeypad::new();
        for d in 0..=9 {
            assert!(
                keypad.find(&format!("btn-{d}")).is_some(),
                "missing button for digit {d}"
            );
        }
    }

    #[test]
    fn test_keypad_labels_use_display_symbols() {
        let keypad = BrowserKeypad::new();
        assert_eq!(keypad.find("btn-divide").unwrap().label, "÷");
        assert_eq!(keypad.find("btn-times").unwrap().label, "×");
        assert_eq!(keypad.find("btn-minus").unwrap().label, "−");
        assert_eq!(keypad.find("btn-plus").unwrap().label, "+");
    }

    #[test]
    fn test_event_for_element() {
        let keypad = BrowserKeypad::new();
        assert_eq!(
            keypad.event_for_element("btn-5"),
            Some(InputEvent::Digit(5))
        );
        assert_eq!(keypad.event_for_element("btn-unknown"), None);
    }

    // ===== Keyboard map tests =====

    #[test]
    fn test_event_for_key_digits() {
        for d in 0u8..=9 {
            assert_eq!(
                event_for_key(&d.to_string()),
                Some(InputEvent::Digit(d)),
                "key {d}"
            );
        }
    }

    #[test]
    fn test_event_for_key_operators() {
        assert_eq!(
            event_for_key("+"),
            Some(InputEvent::Operator(Operator::Add))
        );
        assert_eq!(
            event_for_key("/"),
            Some(InputEvent::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_event_for_key_named_keys() {
        assert_eq!(event_for_key("Enter"), Some(InputEvent::Equals));
        assert_eq!(event_for_key("="), Some(InputEvent::Equals));
        assert_eq!(event_for_key("Escape"), Some(InputEvent::Clear));
        assert_eq!(event_for_key("Backspace"), Some(InputEvent::Backspace));
        assert_eq!(event_for_key("."), Some(InputEvent::Decimal));
        assert_eq!(event_for_key("%"), Some(InputEvent::Percent));
    }

    #[test]
    fn test_event_for_key_ignores_others() {
        assert_eq!(event_for_key("a"), None);
        assert_eq!(event_for_key("Shift"), None);
        assert_eq!(event_for_key("ArrowUp"), None);
        assert_eq!(event_for_key(""), None);
    }

    #[test]
    fn test_keyboard_and_keypad_agree() {
        // Every key with a single-character form maps to the same event a
        // click on the matching button would fire
        let keypad = BrowserKeypad::new();
        for def in keypad.buttons() {
            if let InputEvent::Operator(op) = def.event {
                assert_eq!(event_for_key(&op.symbol().to_string()), Some(def.event));
            }
        }
    }
}
