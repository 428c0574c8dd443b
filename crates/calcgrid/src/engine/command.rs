//! Engine commands

use super::{Operation, UnaryFunction};
use std::rc::Rc;

/// A single calculator command, independent of any widget that issues it
#[derive(Debug, Clone)]
pub enum Command {
    /// Type a digit (0-9)
    Digit(u8),
    /// Type a decimal point
    AddDecimalPoint,
    /// Flip the sign of the current value
    Negate,
    /// Arm a binary operation
    SetOperation(Rc<dyn Operation>),
    /// Execute the pending operation (`=`)
    Execute,
    /// Zero the current value
    Clear,
    /// Return to the initial state
    Reset,
    /// Push the current value onto the operand stack
    Push,
    /// Pop the operand stack into the current value
    Pop,
    /// Toggle inverted mode
    ToggleInvert,
    /// Replace the current value with a function of it
    ApplyFunction(Rc<UnaryFunction>),
}

impl Command {
    /// Short name used in logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::AddDecimalPoint => "decimal_point",
            Self::Negate => "negate",
            Self::SetOperation(_) => "set_operation",
            Self::Execute => "execute",
            Self::Clear => "clear",
            Self::Reset => "reset",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::ToggleInvert => "toggle_invert",
            Self::ApplyFunction(_) => "apply_function",
        }
    }
}
