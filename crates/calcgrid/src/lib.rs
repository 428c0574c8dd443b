//! calcgrid - calculator engine and calculator grid layout
//!
//! Two independent engines plus the keypad that wires them together:
//!
//! - [`engine`]: a command-driven calculator state machine with an operand
//!   stack, left-to-right chained operations and an inverted mode broadcast
//!   to invertible functions
//! - [`layout`]: a fixed 5x7 grid whose first cell spans five columns,
//!   computing container sizes and per-widget bounds
//! - [`keypad`]: the standard 31-slot calculator built from both
//!
//! # Example
//!
//! ```rust
//! use calcgrid::prelude::*;
//!
//! let mut engine = ArithmeticEngine::new();
//! let keypad = Keypad::standard(&mut engine, &Size::new(40, 30)).unwrap();
//!
//! for key in ["2", "+", "3", "*", "4"] {
//!     keypad.press(&mut engine, key).unwrap();
//! }
//! assert_eq!(keypad.press(&mut engine, "=").unwrap(), "20");
//!
//! let bounds = keypad.arrange(Size::new(300, 200), Insets::ZERO);
//! assert_eq!(bounds[0].bounds, Rect::new(0, 0, 212, 37));
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

pub mod engine;
pub mod keypad;
pub mod layout;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::engine::{
        format_value, ArithmeticEngine, ArithmeticOp, CalcError, CalcResult, Command,
        FunctionKind, Invertible, InvertibleHandle, Operation, PowerOperation, UnaryFunction,
    };
    pub use crate::keypad::{Key, KeyId, KeyKind, Keypad};
    pub use crate::layout::{
        CalcLayout, Constraint, GridPosition, Insets, LayoutError, LayoutResult, Placement, Rect,
        Size, SizeHints, SizeKind, WidgetMetrics,
    };
}
