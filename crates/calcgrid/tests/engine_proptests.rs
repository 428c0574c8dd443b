//! Property-based tests for the arithmetic engine
//!
//! Drives the engine through the standard keypad the way a user would.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use calcgrid::prelude::*;
use proptest::prelude::*;
use std::rc::Rc;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = ArithmeticOp> {
    prop_oneof![
        Just(ArithmeticOp::Add),
        Just(ArithmeticOp::Subtract),
        Just(ArithmeticOp::Multiply),
        Just(ArithmeticOp::Divide),
    ]
}

/// Any key label on the standard keypad except the display
fn key_label_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+/-", "+", "-", "*", "/", "=",
        "x^n", "1/x", "log", "ln", "sin", "cos", "tan", "ctg", "clr", "res", "push", "pop", "Inv",
    ])
}

fn op(op: ArithmeticOp) -> Command {
    Command::SetOperation(Rc::new(op))
}

fn standard() -> (ArithmeticEngine, Keypad) {
    let mut engine = ArithmeticEngine::new();
    let keypad = Keypad::standard(&mut engine, &Size::new(40, 30)).expect("standard keypad");
    (engine, keypad)
}

// ===== Scenarios =====

#[test]
fn chained_evaluation_is_left_to_right() {
    let mut engine = ArithmeticEngine::new();
    for command in [
        Command::Digit(2),
        op(ArithmeticOp::Add),
        Command::Digit(3),
        op(ArithmeticOp::Multiply),
        Command::Digit(4),
    ] {
        engine.execute(command).unwrap();
    }
    assert_eq!(engine.handle(Command::Execute), "20");
}

#[test]
fn double_operator_keeps_left_operand() {
    let mut engine = ArithmeticEngine::new();
    for command in [
        Command::Digit(5),
        op(ArithmeticOp::Add),
        op(ArithmeticOp::Multiply),
        Command::Digit(3),
    ] {
        engine.execute(command).unwrap();
    }
    assert_eq!(engine.handle(Command::Execute), "15");
}

#[test]
fn typed_digits_display_literally() {
    let (mut engine, keypad) = standard();
    for key in ["1", "2", "3"] {
        keypad.press(&mut engine, key).unwrap();
    }
    assert_eq!(engine.display(), "123");

    keypad.press(&mut engine, "res").unwrap();
    for key in ["1", ".", "5"] {
        keypad.press(&mut engine, key).unwrap();
    }
    assert_eq!(engine.display(), "1.5");
}

#[test]
fn inverse_of_zero_shows_infinity() {
    let (mut engine, keypad) = standard();
    assert_eq!(keypad.press(&mut engine, "0").unwrap(), "0");
    assert_eq!(keypad.press(&mut engine, "1/x").unwrap(), "Infinity");
}

#[test]
fn log_of_negative_shows_nan() {
    let (mut engine, keypad) = standard();
    for key in ["2", "+/-"] {
        keypad.press(&mut engine, key).unwrap();
    }
    assert_eq!(keypad.press(&mut engine, "log").unwrap(), "NaN");
}

// ===== Properties =====

proptest! {
    /// Typed digits always show the number they spell
    #[test]
    fn prop_digits_form_literal(digits in prop::collection::vec(digit_strategy(), 1..15)) {
        let mut engine = ArithmeticEngine::new();
        let mut literal = String::new();
        for d in digits {
            engine.handle(Command::Digit(d));
            literal.push(char::from(b'0' + d));
        }
        let expected: f64 = literal.parse().unwrap();
        prop_assert_eq!(engine.value(), expected);
        prop_assert_eq!(engine.display().parse::<f64>().unwrap(), expected);
    }

    /// Binary operation through the engine equals direct application
    #[test]
    fn prop_single_operation(a in digit_strategy(), b in digit_strategy(), operator in operator_strategy()) {
        let mut engine = ArithmeticEngine::new();
        engine.handle(Command::Digit(a));
        engine.handle(op(operator));
        engine.handle(Command::Digit(b));
        engine.handle(Command::Execute);
        let expected = operator.apply(f64::from(a), f64::from(b));
        if expected.is_nan() {
            prop_assert!(engine.value().is_nan());
        } else {
            prop_assert_eq!(engine.value(), expected);
        }
    }

    /// Push immediately followed by pop leaves the value unchanged
    #[test]
    fn prop_push_pop_identity(value in -1e9f64..1e9f64) {
        let mut engine = ArithmeticEngine::new();
        engine.set_external_value(value);
        engine.handle(Command::Push);
        engine.handle(Command::Pop);
        prop_assert_eq!(engine.value(), value);
    }

    /// Pop on an empty stack always reports and resets
    #[test]
    fn prop_pop_empty_resets(keys in prop::collection::vec(key_label_strategy(), 0..20)) {
        let (mut engine, keypad) = standard();
        for key in keys {
            keypad.press(&mut engine, key).unwrap();
        }
        while !engine.stack().is_empty() {
            engine.pop().unwrap();
        }
        prop_assert_eq!(engine.pop(), Err(CalcError::StackEmpty));
        prop_assert_eq!(engine.value(), 0.0);
        prop_assert!(engine.pending_operation().is_none());
        prop_assert!(!engine.is_inverted());
        prop_assert!(engine.is_externally_set());
    }

    /// Invert on, invert off returns every key to its normal label
    #[test]
    fn prop_invert_round_trip(keys in prop::collection::vec(key_label_strategy(), 0..20)) {
        let (mut engine, keypad) = standard();
        for key in keys {
            keypad.press(&mut engine, key).unwrap();
        }
        engine.set_inverted(true);
        engine.set_inverted(false);
        for key in keypad.keys() {
            if let KeyKind::Function(function) = key.kind() {
                prop_assert!(!function.is_inverted());
                prop_assert_eq!(key.label(), function.kind().normal_label());
            }
            if let KeyKind::Power(power) = key.kind() {
                prop_assert!(!power.is_inverted());
            }
        }
    }

    /// Any key sequence leaves the engine usable: typing a digit after a
    /// reset always shows that digit
    #[test]
    fn prop_always_recoverable(keys in prop::collection::vec(key_label_strategy(), 0..30), d in digit_strategy()) {
        let (mut engine, keypad) = standard();
        for key in keys {
            keypad.press(&mut engine, key).unwrap();
        }
        keypad.press(&mut engine, "res").unwrap();
        let display = engine.handle(Command::Digit(d));
        prop_assert_eq!(display, d.to_string());
    }
}
