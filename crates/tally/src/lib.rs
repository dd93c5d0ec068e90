//! tally: a keypad-driven desk calculator.
//!
//! The core is a pure state machine: each input event (a digit, an
//! operator, equals, ...) is a total function from the current state to
//! a new state plus a [`core::Readout`] to display. The frontends, a
//! terminal UI and a browser shell, only capture input devices and
//! render readouts; they contain no arithmetic.
//!
//! # Example
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.input_digit(3);
//! engine.input_operator(Operator::Add);
//! engine.input_digit(4);
//! let readout = engine.calculate();
//! assert_eq!(readout.primary, "7");
//! assert_eq!(readout.secondary, "3 + 4 =");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser shell, compiled everywhere; the mock DOM makes the full
/// wiring testable without browser bindings.
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_display, MAX_INPUT_LEN};
    pub use crate::core::{
        add, divide, evaluate, multiply, subtract, CalcError, CalcResult, Engine, InputEvent,
        Operator, Readout, ERROR_MARKER,
    };
    pub use crate::driver::{CalculatorDriver, DomDriver, EngineDriver};
    pub use crate::wasm::{DomCalculator, DomElement, DomEvent, MockDom};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
}
