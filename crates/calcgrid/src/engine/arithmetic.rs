//! The arithmetic engine
//!
//! Operand entry is tracked by an explicit [`Entry`] state instead of
//! independent flags:
//!
//! ```text
//!            digit / "." / clr            op
//! Computed ─────────────────▶ Entering ─────────▶ Armed
//!    ▲                           │  ▲               │
//!    │ =, function, pop, reset   │  └─── digit ─────┘
//!    └───────────────────────────┘
//! ```

use super::{
    format_value, CalcError, CalcResult, Command, InvertibleHandle, InvertibleRegistry, Operation,
    UnaryFunction,
};
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Where the engine is in building up the current operand
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    /// `value` was produced by a computation or reset; the next digit starts
    /// a new number.
    Computed,
    /// Digits typed so far, verbatim (may carry a leading `-` and one `.`).
    Entering { text: String },
    /// An operation was just armed and no operand has been typed yet.
    Armed,
}

/// Calculator state machine driven by [`Command`]s
#[derive(Debug)]
pub struct ArithmeticEngine {
    value: f64,
    left: f64,
    right: f64,
    entry: Entry,
    pending: Option<Rc<dyn Operation>>,
    inverted: bool,
    stack: Vec<f64>,
    invertibles: InvertibleRegistry,
    error: Option<String>,
}

impl Default for ArithmeticEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ArithmeticEngine {
    /// Creates an engine in the reset state
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: 0.0,
            left: 0.0,
            right: 0.0,
            entry: Entry::Computed,
            pending: None,
            inverted: false,
            stack: Vec::new(),
            invertibles: InvertibleRegistry::new(),
            error: None,
        }
    }

    // ===== Accessors =====

    /// The number currently shown or edited
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Left operand of the pending (or last executed) operation
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Right operand of the last executed operation
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// True once a decimal point was typed into the current entry
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        matches!(&self.entry, Entry::Entering { text } if text.contains('.'))
    }

    /// True right after `value` was replaced by a computed result
    #[must_use]
    pub fn is_externally_set(&self) -> bool {
        self.entry == Entry::Computed
    }

    /// True right after an operation was armed, before any new operand
    #[must_use]
    pub fn is_value_consumed(&self) -> bool {
        self.entry == Entry::Armed
    }

    /// The armed operation, if any
    #[must_use]
    pub fn pending_operation(&self) -> Option<&Rc<dyn Operation>> {
        self.pending.as_ref()
    }

    /// Whether inverted mode is on
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Operand stack, bottom first
    #[must_use]
    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    /// Number of registered invertible capabilities
    #[must_use]
    pub fn invertible_count(&self) -> usize {
        self.invertibles.len()
    }

    /// Text to show on the display.
    ///
    /// While typing this is the entry verbatim; while an operation is armed
    /// it is the captured left operand; after an error it is the message.
    #[must_use]
    pub fn display(&self) -> String {
        if let Some(message) = &self.error {
            return message.clone();
        }
        match &self.entry {
            Entry::Entering { text } => text.clone(),
            Entry::Armed => format_value(self.left),
            Entry::Computed => format_value(self.value),
        }
    }

    // ===== Command dispatch =====

    /// Runs one command, returning any error to the caller.
    ///
    /// On error the engine is left as the failing operation left it; callers
    /// that want the standard recovery use [`handle`](Self::handle).
    pub fn execute(&mut self, command: Command) -> CalcResult<()> {
        debug!(command = command.name(), "dispatching calculator command");
        self.error = None;
        match command {
            Command::Digit(digit) => self.append_digit(digit)?,
            Command::AddDecimalPoint => self.add_decimal_point(),
            Command::Negate => self.negate(),
            Command::SetOperation(operation) => self.set_operation(operation),
            Command::Execute => self.execute_operation(),
            Command::Clear => self.clear(),
            Command::Reset => self.reset(),
            Command::Push => self.push(),
            Command::Pop => self.pop()?,
            Command::ToggleInvert => self.toggle_inverted(),
            Command::ApplyFunction(function) => self.apply_function(&function),
        }
        Ok(())
    }

    /// Runs one command and returns the display text.
    ///
    /// Errors never escape: the engine is reset and the error message stays
    /// on the display until the next command.
    pub fn handle(&mut self, command: Command) -> String {
        if let Err(err) = self.execute(command) {
            warn!(%err, "calculator command failed, resetting");
            self.show_error(err.to_string());
        }
        self.display()
    }

    /// Resets the engine and shows `message` on the display
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.reset();
        self.error = Some(message.into());
    }

    // ===== Operand entry =====

    /// Appends a digit to the current entry.
    ///
    /// A computed value or an armed operation makes the digit start a new
    /// number. Fails with [`CalcError::InvalidDigit`] outside 0-9.
    pub fn append_digit(&mut self, digit: u8) -> CalcResult<()> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit { digit });
        }

        let mut text = match std::mem::replace(&mut self.entry, Entry::Computed) {
            Entry::Entering { text } => text,
            Entry::Computed | Entry::Armed => String::from("0"),
        };
        // A lone zero is replaced, not extended.
        if text == "0" || text == "-0" {
            text.pop();
        }
        text.push(char::from(b'0' + digit));

        if let Ok(value) = text.parse() {
            self.value = value;
        }
        self.entry = Entry::Entering { text };
        Ok(())
    }

    /// Adds a decimal point to the current entry; no-op if it has one
    pub fn add_decimal_point(&mut self) {
        match &mut self.entry {
            Entry::Entering { text } => {
                if !text.contains('.') {
                    text.push('.');
                }
            }
            Entry::Computed | Entry::Armed => {
                self.value = 0.0;
                self.entry = Entry::Entering {
                    text: String::from("0."),
                };
            }
        }
    }

    /// Flips the sign of the current value
    pub fn negate(&mut self) {
        self.value = -self.value;
        match &mut self.entry {
            Entry::Entering { text } => {
                if let Some(unsigned) = text.strip_prefix('-') {
                    *text = unsigned.to_string();
                } else {
                    text.insert(0, '-');
                }
            }
            // negating the fresh operand starts typing it
            Entry::Armed => {
                self.entry = Entry::Entering {
                    text: format_value(self.value),
                };
            }
            Entry::Computed => {}
        }
    }

    /// Replaces the value with a computed one; the next digit starts fresh
    pub fn set_external_value(&mut self, value: f64) {
        self.value = value;
        self.entry = Entry::Computed;
    }

    /// Applies a unary function to the current value
    pub fn apply_function(&mut self, function: &UnaryFunction) {
        let result = function.kind().evaluate(self.value, self.inverted);
        trace!(function = function.label(), input = self.value, result, "applied function");
        self.set_external_value(result);
    }

    // ===== Operations =====

    /// Arms a binary operation.
    ///
    /// With an operation already pending, the pending one runs first if an
    /// operand was typed since (left-to-right chaining); otherwise the new
    /// operation just replaces it.
    pub fn set_operation(&mut self, operation: Rc<dyn Operation>) {
        if self.pending.is_some() {
            if self.entry == Entry::Armed {
                debug!(symbol = operation.symbol(), "replacing armed operation");
                self.pending = Some(operation);
                return;
            }
            self.execute_operation();
        }

        self.left = self.value;
        self.value = 0.0;
        self.entry = Entry::Armed;
        debug!(symbol = operation.symbol(), left = self.left, "armed operation");
        self.pending = Some(operation);
    }

    /// Executes the pending operation; no-op if none is pending
    pub fn execute_operation(&mut self) {
        let Some(operation) = self.pending.take() else {
            return;
        };
        self.right = self.value;
        let result = operation.apply(self.left, self.right);
        debug!(
            symbol = operation.symbol(),
            left = self.left,
            right = self.right,
            result,
            "executed operation"
        );
        self.set_external_value(result);
        self.left = result;
    }

    // ===== Methods =====

    /// Zeroes the current value, keeping operands, stack and operation
    pub fn clear(&mut self) {
        self.value = 0.0;
        self.entry = Entry::Entering {
            text: String::from("0"),
        };
    }

    /// Returns to the initial state, including inverted mode
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.left = 0.0;
        self.right = 0.0;
        self.pending = None;
        self.stack.clear();
        self.error = None;
        self.set_inverted(false);
        self.entry = Entry::Computed;
    }

    /// Pushes the current value onto the operand stack
    pub fn push(&mut self) {
        self.stack.push(self.value);
        trace!(value = self.value, depth = self.stack.len(), "pushed operand");
    }

    /// Pops the operand stack into the current value.
    ///
    /// On an empty stack the engine is reset and [`CalcError::StackEmpty`]
    /// is returned.
    pub fn pop(&mut self) -> CalcResult<()> {
        match self.stack.pop() {
            Some(value) => {
                self.set_external_value(value);
                Ok(())
            }
            None => {
                self.reset();
                Err(CalcError::StackEmpty)
            }
        }
    }

    // ===== Inverted mode =====

    /// Sets inverted mode and notifies every registered capability
    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
        self.invertibles.broadcast(inverted);
    }

    /// Flips inverted mode
    pub fn toggle_inverted(&mut self) {
        self.set_inverted(!self.inverted);
    }

    /// Registers a capability to be notified of inverted mode changes
    pub fn register_invertible(&mut self, handle: InvertibleHandle) {
        self.invertibles.register(handle);
    }

    /// Deregisters a capability, returning whether it was registered
    pub fn deregister_invertible(&mut self, handle: &InvertibleHandle) -> bool {
        self.invertibles.deregister(handle)
    }
}
