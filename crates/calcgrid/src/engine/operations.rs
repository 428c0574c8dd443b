//! Binary operations
//!
//! Operations are pure: `apply` has no side effects and is only called when a
//! pending operation executes. Results follow IEEE arithmetic, so `1 / 0` is
//! `Infinity` rather than an error.

use super::Invertible;
use std::cell::Cell;
use std::fmt;

/// A binary operation armed by the engine and applied on execute
pub trait Operation: fmt::Debug {
    /// Computes `left <op> right`
    fn apply(&self, left: f64, right: f64) -> f64;

    /// Label shown on the operation's key
    fn symbol(&self) -> &'static str;
}

/// The four basic arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl ArithmeticOp {
    /// All arithmetic operations in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];
}

impl Operation for ArithmeticOp {
    fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// `x^n`, inverted to the n-th root `n√x`.
///
/// The root is `right^(1/left)` with no domain check: a negative radicand or
/// a zero degree yields whatever `powf` yields (often `NaN`).
#[derive(Debug, Default)]
pub struct PowerOperation {
    inverted: Cell<bool>,
}

impl PowerOperation {
    /// Label in normal mode
    pub const NORMAL_LABEL: &'static str = "x^n";
    /// Label in inverted mode
    pub const INVERTED_LABEL: &'static str = "n\u{221A}x";

    /// Creates a power operation in normal mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operation for PowerOperation {
    fn apply(&self, left: f64, right: f64) -> f64 {
        if self.inverted.get() {
            right.powf(1.0 / left)
        } else {
            left.powf(right)
        }
    }

    fn symbol(&self) -> &'static str {
        if self.inverted.get() {
            Self::INVERTED_LABEL
        } else {
            Self::NORMAL_LABEL
        }
    }
}

impl Invertible for PowerOperation {
    fn set_inverted(&self, inverted: bool) {
        self.inverted.set(inverted);
    }

    fn is_inverted(&self) -> bool {
        self.inverted.get()
    }
}
