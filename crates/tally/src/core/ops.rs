//! Arithmetic primitives and the operator dispatch table.

use serde::{Deserialize, Serialize};

use super::{CalcError, CalcResult};

/// The four keypad operators.
///
/// A closed enum: there is no "unknown operator" arm anywhere downstream
/// because an invalid symbol can never be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Returns the ASCII symbol, as typed on a keyboard.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the typographic symbol shown on displays and buttons.
    #[must_use]
    pub const fn display_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '\u{2212}', // −
            Self::Multiply => '\u{00d7}', // ×
            Self::Divide => '\u{00f7}',   // ÷
        }
    }

    /// Parses an ASCII operator character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// Addition: a + b
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtraction: a - b
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplication: a * b
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Division: a / b, rejecting a zero divisor.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Parses both operands and applies the operator.
///
/// Operands arrive as the textual numerals the engine maintains; parsing
/// happens here, at the last possible moment.
pub fn evaluate(op: Operator, a: &str, b: &str) -> CalcResult<f64> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    match op {
        Operator::Add => Ok(add(a, b)),
        Operator::Subtract => Ok(subtract(a, b)),
        Operator::Multiply => Ok(multiply(a, b)),
        Operator::Divide => divide(a, b),
    }
}

fn parse_operand(text: &str) -> CalcResult<f64> {
    text.parse()
        .map_err(|_| CalcError::InvalidOperand(text.to_string()))
}
