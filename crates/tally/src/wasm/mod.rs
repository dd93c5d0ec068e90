//! Browser frontend.
//!
//! The shell and its mock DOM compile everywhere, so the full wiring is
//! testable without a browser; the `wasm` feature adds the real
//! `wasm-bindgen` entry point.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
pub mod keypad;
mod shell;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use keypad::{BrowserKeypad, ButtonDef};
pub use shell::{
    DomCalculator, ACTIVE_CLASS, CURRENT_OPERAND_ID, ERROR_CLASS, PREVIOUS_OPERAND_ID,
};
