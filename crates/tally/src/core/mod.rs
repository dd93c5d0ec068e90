//! Pure calculator core: state transitions, arithmetic, display policy.
//!
//! Nothing here touches an input device or a screen. Frontends feed
//! [`InputEvent`]s into an [`Engine`] and render the [`Readout`] each
//! transition returns.

pub mod engine;
pub mod format;
mod ops;

pub use engine::{Engine, InputEvent, Readout, ERROR_MARKER};
pub use ops::{add, divide, evaluate, multiply, subtract, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors produced by the arithmetic layer.
///
/// Division by zero is the only failure a keypad user can provoke. It is
/// propagated as a value, never a panic, so every caller renders it the
/// same way: show the marker, reset the machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// An operand string failed to parse as a decimal numeral
    #[error("invalid operand: {0}")]
    InvalidOperand(String),
}
