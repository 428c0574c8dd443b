//! Calculator arithmetic engine
//!
//! The engine interprets a stream of [`Command`]s (digits, operations and
//! methods) into a running numeric result and a display string.
//!
//! - Binary operations evaluate strictly left to right, no precedence
//! - Division by zero and domain errors surface as `Infinity`/`NaN` text
//! - Only an empty-stack pop is an error at runtime

mod arithmetic;
mod command;
mod functions;
mod invertible;
mod operations;

pub use arithmetic::ArithmeticEngine;
pub use command::Command;
pub use functions::{FunctionKind, UnaryFunction};
pub use invertible::{Invertible, InvertibleHandle, InvertibleRegistry};
pub use operations::{ArithmeticOp, Operation, PowerOperation};

use thiserror::Error;

/// Result type for engine commands
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised by the arithmetic engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// `pop` on an empty operand stack
    #[error("Stack empty")]
    StackEmpty,

    /// Digit outside 0-9
    #[error("Illegal digit: {digit}, digit must be an integer in range 0-9")]
    InvalidDigit {
        /// Offending digit
        digit: u8,
    },

    /// Key label not present on the keypad
    #[error("Unknown key: {label}")]
    UnknownKey {
        /// Offending label
        label: String,
    },
}

impl CalcError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(label: impl Into<String>) -> Self {
        Self::UnknownKey {
            label: label.into(),
        }
    }
}

/// Maximum number of fractional digits shown on the display
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Renders a value the way the display shows it.
///
/// Non-finite values render as `NaN`, `Infinity` or `-Infinity`. Finite values
/// use fixed notation with at most [`MAX_FRACTION_DIGITS`] fractional digits,
/// trailing zeros and a dangling point removed, and `.` as the separator.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let mut text = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}
