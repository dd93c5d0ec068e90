//! The input/accumulator state machine.
//!
//! Every transition is a total function: invalid input degrades to a
//! no-op, and the single failure mode (division by zero) renders a
//! marker and resets the machine. Frontends call [`Engine::apply`] with
//! an [`InputEvent`] and render the returned [`Readout`]; they never
//! reach into the state itself.

use serde::{Deserialize, Serialize};

use super::format::{canonical, format_display, MAX_INPUT_LEN};
use super::ops::{evaluate, Operator};

/// Display string shown in place of a result when division by zero
/// occurs. Distinct from every valid numeral.
pub const ERROR_MARKER: &str = "Division by zero";

/// A single keypad or keyboard input, device-independent.
///
/// Pointer clicks and key presses both collapse to these before they
/// reach the engine, so the dispatch logic exists exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// One of the four operator keys
    Operator(Operator),
    /// The equals key
    Equals,
    /// The clear key
    Clear,
    /// The backspace key
    Backspace,
    /// The percent key
    Percent,
}

impl InputEvent {
    /// Maps a calculator character to its event: digits, `.`, the four
    /// operators, `=` and `%`. Anything else maps to `None`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        match c {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// On-screen label for the button that fires this event.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.display_symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "\u{232b}".to_string(), // ⌫
            Self::Percent => "%".to_string(),
        }
    }
}

/// What a transition asks the presentation layer to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    /// Primary display: the operand being edited, a result, or the error marker
    pub primary: String,
    /// Secondary display: the pending expression (`"3 +"`) or the
    /// completed one (`"3 + 4 ="`)
    pub secondary: String,
    /// True exactly when `primary` holds the error marker
    pub error: bool,
}

/// Calculator state machine.
///
/// Operands are held as the textual numerals the user typed; parsing
/// happens only at evaluation time, so the display and the arithmetic
/// can never disagree about what was entered.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Primary display text: the operand currently being edited
    display: String,
    /// Secondary display text: the pending or completed expression
    previous: String,
    /// Operand captured before the pending operator (empty when absent)
    first_operand: String,
    /// Operator selected but not yet applied
    pending_op: Option<Operator>,
    /// Next digit or decimal starts a fresh number instead of appending
    reset_on_next_input: bool,
    /// Last computed result, retained for chaining
    last_result: Option<f64>,
    /// Primary display currently shows the error marker
    error: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in the cleared phase: display `"0"`, nothing
    /// pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous: String::new(),
            first_operand: String::new(),
            pending_op: None,
            reset_on_next_input: false,
            last_result: None,
            error: false,
        }
    }

    /// Current primary display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current secondary display text.
    #[must_use]
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// The operator selected but not yet applied.
    #[must_use]
    pub fn pending_op(&self) -> Option<Operator> {
        self.pending_op
    }

    /// The last computed result, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// True when the primary display shows the error marker.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// True when the next digit or decimal starts a fresh number.
    #[must_use]
    pub fn next_input_resets(&self) -> bool {
        self.reset_on_next_input
    }

    /// Replaces the primary display text and marks it editable.
    /// Primarily for tests that need a specific editing state.
    pub fn set_display(&mut self, text: &str) {
        self.display = text.to_string();
        self.reset_on_next_input = false;
        self.error = false;
    }

    /// Snapshot of both displays without feeding input.
    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout {
            primary: self.display.clone(),
            secondary: self.previous.clone(),
            error: self.error,
        }
    }

    /// Dispatches one input event to its transition.
    pub fn apply(&mut self, event: InputEvent) -> Readout {
        match event {
            InputEvent::Digit(d) => self.input_digit(d),
            InputEvent::Decimal => self.input_decimal(),
            InputEvent::Operator(op) => self.input_operator(op),
            InputEvent::Equals => self.calculate(),
            InputEvent::Clear => self.clear_all(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Percent => self.percent(),
        }
    }

    /// Digit entry. Starts a fresh number after an operator or a result,
    /// replaces a lone `"0"`, and ignores input past the display cap.
    pub fn input_digit(&mut self, digit: u8) -> Readout {
        self.acknowledge_error();
        if digit > 9 {
            return self.readout();
        }
        if self.reset_on_next_input || self.display == "0" {
            self.display = digit.to_string();
            self.reset_on_next_input = false;
        } else if self.display.len() < MAX_INPUT_LEN {
            self.display.push(char::from(b'0' + digit));
        }
        self.readout()
    }

    /// Decimal point entry. At most one `.` per numeral; after a result
    /// the display becomes `"0."`.
    pub fn input_decimal(&mut self) -> Readout {
        self.acknowledge_error();
        if self.reset_on_next_input {
            self.display = "0.".to_string();
            self.reset_on_next_input = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self.readout()
    }

    /// Operator selection. If a calculation is already pending and the
    /// second operand has been entered, it is folded first (`3 + 4 *`
    /// shows `7` before `*` becomes pending).
    pub fn input_operator(&mut self, op: Operator) -> Readout {
        self.acknowledge_error();
        if let Some(pending) = self.pending_op {
            if !self.first_operand.is_empty() && !self.reset_on_next_input {
                match evaluate(pending, &self.first_operand, &self.display) {
                    Ok(value) => {
                        self.display = format_display(value);
                        self.first_operand = canonical(value);
                    }
                    Err(_) => return self.fail_division(),
                }
            } else {
                // Operator re-selected before a second operand: the
                // current display stays the first operand.
                self.first_operand = self.display.clone();
            }
        } else {
            self.first_operand = self.display.clone();
        }
        self.pending_op = Some(op);
        self.reset_on_next_input = true;
        self.previous = format!("{} {}", self.first_operand, op.display_symbol());
        self.readout()
    }

    /// Equals. No-op until both a first operand and an operator exist.
    pub fn calculate(&mut self) -> Readout {
        self.acknowledge_error();
        let Some(pending) = self.pending_op else {
            return self.readout();
        };
        if self.first_operand.is_empty() {
            return self.readout();
        }
        let second = self.display.clone();
        match evaluate(pending, &self.first_operand, &second) {
            Ok(value) => {
                self.previous = format!(
                    "{} {} {} =",
                    self.first_operand,
                    pending.display_symbol(),
                    second
                );
                self.display = format_display(value);
                self.last_result = Some(value);
                self.first_operand = canonical(value);
                self.pending_op = None;
                self.reset_on_next_input = true;
            }
            // Operands are engine-maintained numerals, so the only
            // reachable failure here is division by zero.
            Err(_) => return self.fail_division(),
        }
        self.readout()
    }

    /// Resets every field to the cleared phase.
    pub fn clear_all(&mut self) -> Readout {
        self.reset_fields();
        self.readout()
    }

    /// Deletes the last character of the display. A just-produced result
    /// cannot be edited this way; it must be re-entered fresh.
    pub fn backspace(&mut self) -> Readout {
        self.acknowledge_error();
        if self.reset_on_next_input {
            return self.readout();
        }
        if self.display.len() == 1
            || (self.display.len() == 2 && self.display.starts_with('-'))
        {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
        self.readout()
    }

    /// Replaces the display with its value divided by 100.
    pub fn percent(&mut self) -> Readout {
        self.acknowledge_error();
        if let Ok(value) = self.display.parse::<f64>() {
            self.display = format_display(value / 100.0);
        }
        self.readout()
    }

    /// Renders the division-by-zero marker over a freshly cleared state.
    fn fail_division(&mut self) -> Readout {
        self.reset_fields();
        self.display = ERROR_MARKER.to_string();
        self.error = true;
        self.readout()
    }

    /// The marker stays on screen only until the next input; underneath
    /// it the state already equals the cleared state.
    fn acknowledge_error(&mut self) {
        if self.error {
            self.reset_fields();
        }
    }

    fn reset_fields(&mut self) {
        self.display = "0".to_string();
        self.previous.clear();
        self.first_operand.clear();
        self.pending_op = None;
        self.reset_on_next_input = false;
        self.last_result = None;
        self.error = false;
    }
}
