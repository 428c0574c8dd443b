//! Unary function keys
//!
//! Every function is an [`Invertible`] capability: its label flips together
//! with the engine's inverted flag, and so does the math it applies.

use super::Invertible;
use std::cell::Cell;

/// The unary functions on the standard keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `1/x` (its own inverse)
    Reciprocal,
    /// `log` / `10^x`
    Log,
    /// `ln` / `e^x`
    Ln,
    /// `sin` / `arcsin`
    Sin,
    /// `cos` / `arccos`
    Cos,
    /// `tan` / `arctan`
    Tan,
    /// `ctg` / `arcctg`
    Ctg,
}

impl FunctionKind {
    /// All functions in keypad order
    pub const ALL: [Self; 7] = [
        Self::Reciprocal,
        Self::Log,
        Self::Ln,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ctg,
    ];

    /// Label in normal mode
    #[must_use]
    pub const fn normal_label(self) -> &'static str {
        match self {
            Self::Reciprocal => "1/x",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ctg => "ctg",
        }
    }

    /// Label in inverted mode
    #[must_use]
    pub const fn inverted_label(self) -> &'static str {
        match self {
            Self::Reciprocal => "1/x",
            Self::Log => "10^x",
            Self::Ln => "e^x",
            Self::Sin => "arcsin",
            Self::Cos => "arccos",
            Self::Tan => "arctan",
            Self::Ctg => "arcctg",
        }
    }

    /// Applies the function (or its inverse) to `x`.
    ///
    /// Domain errors are not checked: `log(-1)` is `NaN`, `1/0` is `Infinity`.
    #[must_use]
    pub fn evaluate(self, x: f64, inverted: bool) -> f64 {
        match (self, inverted) {
            (Self::Reciprocal, _) => 1.0 / x,
            (Self::Log, false) => x.log10(),
            (Self::Log, true) => 10f64.powf(x),
            (Self::Ln, false) => x.ln(),
            (Self::Ln, true) => x.exp(),
            (Self::Sin, false) => x.sin(),
            (Self::Sin, true) => x.asin(),
            (Self::Cos, false) => x.cos(),
            (Self::Cos, true) => x.acos(),
            (Self::Tan, false) => x.tan(),
            (Self::Tan, true) => x.atan(),
            (Self::Ctg, false) => 1.0 / x.tan(),
            (Self::Ctg, true) => 1.0 / x.atan(),
        }
    }
}

/// A function key registered with the engine as an invertible capability
#[derive(Debug)]
pub struct UnaryFunction {
    kind: FunctionKind,
    inverted: Cell<bool>,
}

impl UnaryFunction {
    /// Creates a function in normal mode
    #[must_use]
    pub fn new(kind: FunctionKind) -> Self {
        Self {
            kind,
            inverted: Cell::new(false),
        }
    }

    /// The underlying function
    #[must_use]
    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// Current label
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.inverted.get() {
            self.kind.inverted_label()
        } else {
            self.kind.normal_label()
        }
    }
}

impl Invertible for UnaryFunction {
    fn set_inverted(&self, inverted: bool) {
        self.inverted.set(inverted);
    }

    fn is_inverted(&self) -> bool {
        self.inverted.get()
    }
}
