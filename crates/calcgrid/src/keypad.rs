//! Standard calculator keypad
//!
//! Builds every key of the classic calculator at its fixed grid cell,
//! registers the invertible keys with an engine and turns key presses into
//! engine [`Command`]s.
//!
//! ```text
//! [            display             ] [ = ] [ clr ]
//! [1/x] [sin] [ 7 ] [ 8 ] [  9  ] [ / ] [ res ]
//! [log] [cos] [ 4 ] [ 5 ] [  6  ] [ * ] [push ]
//! [ln ] [tan] [ 1 ] [ 2 ] [  3  ] [ - ] [ pop ]
//! [x^n] [ctg] [ 0 ] [+/-] [  .  ] [ + ] [ Inv ]
//! ```

use crate::engine::{
    ArithmeticEngine, ArithmeticOp, CalcError, CalcResult, Command, FunctionKind, Operation,
    PowerOperation, UnaryFunction,
};
use crate::layout::{CalcLayout, GridPosition, Insets, LayoutResult, Placement, Size, SizeHints};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::debug;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Identifies a key; doubles as the layout handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyId(pub usize);

/// What a key does
#[derive(Debug, Clone)]
pub enum KeyKind {
    /// The display field (occupies the merged cell, issues no command)
    Display,
    /// Digit 0-9
    Digit(u8),
    /// `.`
    DecimalPoint,
    /// `+/-`
    Negate,
    /// Unary function
    Function(Rc<UnaryFunction>),
    /// `+`, `-`, `*`, `/`
    Arithmetic(ArithmeticOp),
    /// `x^n` / `n√x`
    Power(Rc<PowerOperation>),
    /// `=`
    Equals,
    /// `clr`
    Clear,
    /// `res`
    Reset,
    /// `push`
    Push,
    /// `pop`
    Pop,
    /// `Inv`
    Invert,
}

/// One key of the keypad
#[derive(Debug, Clone)]
pub struct Key {
    id: KeyId,
    kind: KeyKind,
    position: GridPosition,
}

impl Key {
    /// Key identifier
    #[must_use]
    pub fn id(&self) -> KeyId {
        self.id
    }

    /// What the key does
    #[must_use]
    pub fn kind(&self) -> &KeyKind {
        &self.kind
    }

    /// Grid cell of the key
    #[must_use]
    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Current label; invertible keys change label with inverted mode
    #[must_use]
    pub fn label(&self) -> &'static str {
        match &self.kind {
            KeyKind::Display => "display",
            KeyKind::Digit(d) => DIGIT_LABELS.get(usize::from(*d)).copied().unwrap_or("?"),
            KeyKind::DecimalPoint => ".",
            KeyKind::Negate => "+/-",
            KeyKind::Function(function) => function.label(),
            KeyKind::Arithmetic(op) => op.symbol(),
            KeyKind::Power(power) => power.symbol(),
            KeyKind::Equals => "=",
            KeyKind::Clear => "clr",
            KeyKind::Reset => "res",
            KeyKind::Push => "push",
            KeyKind::Pop => "pop",
            KeyKind::Invert => "Inv",
        }
    }

    /// True if `label` names this key in either mode
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        match &self.kind {
            KeyKind::Function(function) => {
                let kind = function.kind();
                label == kind.normal_label() || label == kind.inverted_label()
            }
            KeyKind::Power(_) => {
                label == PowerOperation::NORMAL_LABEL || label == PowerOperation::INVERTED_LABEL
            }
            _ => label == self.label(),
        }
    }

    /// Command issued when the key is pressed
    #[must_use]
    pub fn command(&self) -> Option<Command> {
        let command = match &self.kind {
            KeyKind::Display => return None,
            KeyKind::Digit(d) => Command::Digit(*d),
            KeyKind::DecimalPoint => Command::AddDecimalPoint,
            KeyKind::Negate => Command::Negate,
            KeyKind::Function(function) => Command::ApplyFunction(Rc::clone(function)),
            KeyKind::Arithmetic(op) => Command::SetOperation(Rc::new(*op)),
            KeyKind::Power(power) => Command::SetOperation(Rc::clone(power) as Rc<dyn Operation>),
            KeyKind::Equals => Command::Execute,
            KeyKind::Clear => Command::Clear,
            KeyKind::Reset => Command::Reset,
            KeyKind::Push => Command::Push,
            KeyKind::Pop => Command::Pop,
            KeyKind::Invert => Command::ToggleInvert,
        };
        Some(command)
    }
}

/// The standard keypad: 30 keys plus the display on a [`CalcLayout`]
#[derive(Debug)]
pub struct Keypad {
    keys: Vec<Key>,
    layout: CalcLayout<KeyId>,
}

impl Keypad {
    /// Gap between keys in pixels
    pub const GAP: i32 = 3;

    /// Builds the standard keypad, registering its invertible keys with
    /// `engine`. Every key reports `metrics` as its size hints.
    pub fn standard<W>(engine: &mut ArithmeticEngine, metrics: &W) -> LayoutResult<Self>
    where
        W: SizeHints + ?Sized,
    {
        Self::with_gaps(engine, metrics, Self::GAP, Self::GAP)
    }

    /// Builds the standard keypad with custom gaps
    pub fn with_gaps<W>(
        engine: &mut ArithmeticEngine,
        metrics: &W,
        hgap: i32,
        vgap: i32,
    ) -> LayoutResult<Self>
    where
        W: SizeHints + ?Sized,
    {
        let mut keypad = Self {
            keys: Vec::new(),
            layout: CalcLayout::with_gaps(hgap, vgap),
        };

        keypad.add(KeyKind::Display, "1,1", metrics)?;

        for (digit, position) in [
            (7, "2,3"),
            (8, "2,4"),
            (9, "2,5"),
            (4, "3,3"),
            (5, "3,4"),
            (6, "3,5"),
            (1, "4,3"),
            (2, "4,4"),
            (3, "4,5"),
            (0, "5,3"),
        ] {
            keypad.add(KeyKind::Digit(digit), position, metrics)?;
        }

        for (kind, position) in [
            (FunctionKind::Reciprocal, "2,1"),
            (FunctionKind::Log, "3,1"),
            (FunctionKind::Ln, "4,1"),
            (FunctionKind::Sin, "2,2"),
            (FunctionKind::Cos, "3,2"),
            (FunctionKind::Tan, "4,2"),
            (FunctionKind::Ctg, "5,2"),
        ] {
            let function = Rc::new(UnaryFunction::new(kind));
            engine.register_invertible(function.clone());
            keypad.add(KeyKind::Function(function), position, metrics)?;
        }
        keypad.add(KeyKind::Negate, "5,4", metrics)?;

        let power = Rc::new(PowerOperation::new());
        engine.register_invertible(power.clone());
        keypad.add(KeyKind::Power(power), "5,1", metrics)?;
        keypad.add(KeyKind::DecimalPoint, "5,5", metrics)?;
        keypad.add(KeyKind::Equals, "1,6", metrics)?;
        for (op, position) in [
            (ArithmeticOp::Divide, "2,6"),
            (ArithmeticOp::Multiply, "3,6"),
            (ArithmeticOp::Subtract, "4,6"),
            (ArithmeticOp::Add, "5,6"),
        ] {
            keypad.add(KeyKind::Arithmetic(op), position, metrics)?;
        }

        for (kind, position) in [
            (KeyKind::Clear, "1,7"),
            (KeyKind::Reset, "2,7"),
            (KeyKind::Push, "3,7"),
            (KeyKind::Pop, "4,7"),
            (KeyKind::Invert, "5,7"),
        ] {
            keypad.add(kind, position, metrics)?;
        }

        debug!(keys = keypad.keys.len(), "built standard keypad");
        Ok(keypad)
    }

    fn add<W>(&mut self, kind: KeyKind, constraint: &str, metrics: &W) -> LayoutResult<()>
    where
        W: SizeHints + ?Sized,
    {
        let id = KeyId(self.keys.len());
        let position = self.layout.add_component(id, constraint, metrics)?;
        self.keys.push(Key { id, kind, position });
        Ok(())
    }

    /// All keys in construction order
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Key by id
    #[must_use]
    pub fn key(&self, id: KeyId) -> Option<&Key> {
        self.keys.get(id.0)
    }

    /// Key by label, in either inverted mode
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&Key> {
        self.keys.iter().find(|key| key.matches(label))
    }

    /// The underlying layout
    #[must_use]
    pub fn layout(&self) -> &CalcLayout<KeyId> {
        &self.layout
    }

    /// Presses the key named `label` and returns the new display text.
    ///
    /// Engine errors are recovered by the engine (reset plus message);
    /// only an unknown label fails.
    pub fn press(&self, engine: &mut ArithmeticEngine, label: &str) -> CalcResult<String> {
        let key = self
            .find(label)
            .ok_or_else(|| CalcError::unknown_key(label))?;
        Ok(match key.command() {
            Some(command) => engine.handle(command),
            None => engine.display(),
        })
    }

    /// Container size at which every key gets its preferred size
    #[must_use]
    pub fn preferred_size<W>(&self, metrics: &W, insets: Insets) -> Size
    where
        W: SizeHints,
    {
        self.layout
            .preferred_layout_size(std::iter::repeat(metrics).take(self.keys.len()), insets)
    }

    /// Lays the keypad out inside a container
    #[must_use]
    pub fn arrange(&self, container: Size, insets: Insets) -> Vec<Placement<KeyId>> {
        self.layout.layout_container(container, insets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;

    fn standard() -> (ArithmeticEngine, Keypad) {
        let mut engine = ArithmeticEngine::new();
        let keypad = Keypad::standard(&mut engine, &Size::new(40, 30)).unwrap();
        (engine, keypad)
    }

    fn press_all(keypad: &Keypad, engine: &mut ArithmeticEngine, labels: &[&str]) -> String {
        let mut display = engine.display();
        for label in labels {
            display = keypad.press(engine, label).unwrap();
        }
        display
    }

    #[test]
    fn test_standard_keypad_fills_all_slots() {
        let (engine, keypad) = standard();
        assert_eq!(keypad.keys().len(), 31);
        assert_eq!(keypad.layout().len(), 31);
        // seven functions and the power operation
        assert_eq!(engine.invertible_count(), 8);
    }

    #[test]
    fn test_key_positions_match_layout() {
        let (_, keypad) = standard();
        for key in keypad.keys() {
            assert_eq!(keypad.layout().position_of(&key.id()), Some(key.position()));
        }
        assert_eq!(keypad.find("7").unwrap().position(), GridPosition::new(2, 3));
        assert_eq!(keypad.find("=").unwrap().position(), GridPosition::new(1, 6));
        assert_eq!(keypad.find("Inv").unwrap().position(), GridPosition::new(5, 7));
    }

    #[test]
    fn test_press_chained_expression() {
        let (mut engine, keypad) = standard();
        let display = press_all(&keypad, &mut engine, &["2", "+", "3", "*", "4", "="]);
        assert_eq!(display, "20");
    }

    #[test]
    fn test_invert_flips_labels() {
        let (mut engine, keypad) = standard();
        keypad.press(&mut engine, "Inv").unwrap();
        assert!(engine.is_inverted());
        assert!(keypad.find("arcsin").is_some());
        assert_eq!(keypad.find("sin").unwrap().label(), "arcsin");
        assert_eq!(keypad.find("x^n").unwrap().label(), "n\u{221A}x");

        keypad.press(&mut engine, "Inv").unwrap();
        assert_eq!(keypad.find("sin").unwrap().label(), "sin");
    }

    #[test]
    fn test_nth_root_through_keys() {
        let (mut engine, keypad) = standard();
        let display = press_all(&keypad, &mut engine, &["Inv", "3", "x^n", "8", "="]);
        assert_eq!(display, "2");
    }

    #[test]
    fn test_reset_key_restores_labels() {
        let (mut engine, keypad) = standard();
        press_all(&keypad, &mut engine, &["Inv", "res"]);
        assert!(!engine.is_inverted());
        assert_eq!(keypad.find("log").unwrap().label(), "log");
    }

    #[test]
    fn test_pop_on_empty_stack_shows_message() {
        let (mut engine, keypad) = standard();
        assert_eq!(press_all(&keypad, &mut engine, &["5", "pop"]), "Stack empty");
        assert_eq!(keypad.press(&mut engine, "1").unwrap(), "1");
    }

    #[test]
    fn test_push_pop_through_keys() {
        let (mut engine, keypad) = standard();
        let display = press_all(&keypad, &mut engine, &["4", ".", "5", "push", "clr", "pop"]);
        assert_eq!(display, "4.5");
    }

    #[test]
    fn test_unknown_key() {
        let (mut engine, keypad) = standard();
        assert_eq!(
            keypad.press(&mut engine, "sqrt"),
            Err(CalcError::unknown_key("sqrt"))
        );
    }

    #[test]
    fn test_display_key_is_inert() {
        let (mut engine, keypad) = standard();
        press_all(&keypad, &mut engine, &["9"]);
        assert_eq!(keypad.press(&mut engine, "display").unwrap(), "9");
    }

    #[test]
    fn test_preferred_size_of_standard_keypad() {
        let (_, keypad) = standard();
        let size = keypad.preferred_size(&Size::new(40, 30), Insets::ZERO);
        assert_eq!(size, Size::new(7 * 40 + 6 * 3, 5 * 30 + 4 * 3));
        assert_eq!(keypad.layout().max_preferred_size(), Size::new(40, 30));
    }

    #[test]
    fn test_arrange_display_spans_first_row() {
        let (_, keypad) = standard();
        let placements = keypad.arrange(Size::new(300, 200), Insets::ZERO);
        assert_eq!(placements.len(), 31);
        let display = placements
            .iter()
            .find(|p| p.position == GridPosition::new(1, 1))
            .unwrap();
        assert_eq!(display.bounds, Rect::new(0, 0, 212, 37));
    }
}
