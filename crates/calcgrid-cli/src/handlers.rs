//! Command handlers
//!
//! Each handler builds a serializable report; rendering lives in
//! [`crate::output`].

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use calcgrid::engine::ArithmeticEngine;
use calcgrid::keypad::Keypad;
use calcgrid::layout::{GridPosition, Rect, Size};
use serde::Serialize;
use tracing::{debug, info};

/// Display after a single key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalStep {
    /// Key label as typed
    pub key: String,
    /// Display text after the press
    pub display: String,
}

/// Result of the eval command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    /// Final display text
    pub display: String,
    /// Operand stack, bottom first
    pub stack: Vec<f64>,
    /// Whether the keypad ended in inverted mode
    pub inverted: bool,
    /// Per-key displays, only with `--trace`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<EvalStep>,
}

/// Bounds of one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyBounds {
    /// Key label
    pub label: &'static str,
    /// Grid cell
    pub position: GridPosition,
    /// Pixel rectangle
    pub bounds: Rect,
}

/// Result of the layout command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    /// Container that was laid out
    pub container: Size,
    /// Size of one grid cell
    pub cell: Size,
    /// Container size at which every key gets its preferred size
    pub preferred: Size,
    /// Key rectangles in row-major order
    pub keys: Vec<KeyBounds>,
}

/// One keypad entry for the keys command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEntry {
    /// Label in normal mode
    pub label: &'static str,
    /// Label in inverted mode, for invertible keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverted_label: Option<&'static str>,
    /// Grid cell
    pub position: GridPosition,
}

fn build_keypad(config: &CliConfig, engine: &mut ArithmeticEngine) -> CliResult<Keypad> {
    Ok(Keypad::with_gaps(
        engine,
        &config.button,
        config.hgap,
        config.vgap,
    )?)
}

/// Presses `keys` in order on a fresh standard keypad
pub fn eval(config: &CliConfig, keys: &[String], trace: bool) -> CliResult<EvalReport> {
    let mut engine = ArithmeticEngine::new();
    let keypad = build_keypad(config, &mut engine)?;

    let mut steps = Vec::new();
    let mut shown = engine.display();
    for key in keys {
        shown = keypad.press(&mut engine, key)?;
        debug!(key = %key, shown = %shown, "pressed");
        if trace {
            steps.push(EvalStep {
                key: key.clone(),
                display: shown.clone(),
            });
        }
    }
    info!(keys = keys.len(), "evaluation finished");

    Ok(EvalReport {
        display: shown,
        stack: engine.stack().to_vec(),
        inverted: engine.is_inverted(),
        steps,
    })
}

/// Lays out the standard keypad in `container`
pub fn layout(config: &CliConfig, container: Size) -> CliResult<LayoutReport> {
    if container.width < 0 || container.height < 0 {
        return Err(CliError::invalid_argument(format!(
            "container size must not be negative, got {}x{}",
            container.width, container.height
        )));
    }

    let mut engine = ArithmeticEngine::new();
    let keypad = build_keypad(config, &mut engine)?;

    let keys = keypad
        .arrange(container, config.insets)
        .into_iter()
        .filter_map(|placement| {
            keypad.key(placement.handle).map(|key| KeyBounds {
                label: key.label(),
                position: placement.position,
                bounds: placement.bounds,
            })
        })
        .collect();

    Ok(LayoutReport {
        container,
        cell: keypad.layout().cell_size(container, config.insets),
        preferred: keypad.preferred_size(&config.button, config.insets),
        keys,
    })
}

/// Lists the standard keypad's keys in construction order
pub fn keys(config: &CliConfig) -> CliResult<Vec<KeyEntry>> {
    let mut engine = ArithmeticEngine::new();
    let keypad = build_keypad(config, &mut engine)?;
    let normal: Vec<_> = keypad.keys().iter().map(|key| key.label()).collect();

    engine.set_inverted(true);
    Ok(keypad
        .keys()
        .iter()
        .zip(normal)
        .map(|(key, label)| {
            let inverted = key.label();
            KeyEntry {
                label,
                inverted_label: (inverted != label).then_some(inverted),
                position: key.position(),
            }
        })
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use calcgrid::engine::{format_value, CalcError};

    fn keys_of(labels: &[&str]) -> Vec<String> {
        labels.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_eval_chained() {
        let report = eval(&CliConfig::new(), &keys_of(&["2", "+", "3", "*", "4", "="]), false)
            .unwrap();
        assert_eq!(report.display, "20");
        assert!(report.steps.is_empty());
        assert!(report.stack.is_empty());
    }

    #[test]
    fn test_eval_trace_records_every_key() {
        let report = eval(&CliConfig::new(), &keys_of(&["1", "2", "push"]), true).unwrap();
        assert_eq!(report.steps.len(), 3);
        assert_eq!(report.steps[1].display, "12");
        assert_eq!(report.stack, vec![12.0]);
    }

    #[test]
    fn test_eval_inverted_label_accepted() {
        let report = eval(&CliConfig::new(), &keys_of(&["Inv", "2", "10^x"]), false).unwrap();
        assert!(report.inverted);
        assert_eq!(report.display, "100");

        let report = eval(&CliConfig::new(), &keys_of(&["2", "10^x"]), false).unwrap();
        assert!(!report.inverted);
        assert_eq!(report.display, format_value(2f64.log10()));
    }

    #[test]
    fn test_eval_unknown_key() {
        let err = eval(&CliConfig::new(), &keys_of(&["2", "sqrt"]), false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Calc(CalcError::UnknownKey { ref label }) if label == "sqrt"
        ));
    }

    #[test]
    fn test_eval_pop_empty_recovers() {
        let report = eval(&CliConfig::new(), &keys_of(&["pop"]), false).unwrap();
        assert_eq!(report.display, "Stack empty");
    }

    #[test]
    fn test_layout_300_by_200() {
        let report = layout(&CliConfig::new(), Size::new(300, 200)).unwrap();
        assert_eq!(report.cell, Size::new(40, 37));
        assert_eq!(report.keys.len(), 31);
        assert_eq!(report.keys[0].label, "display");
        assert_eq!(report.keys[0].bounds, Rect::new(0, 0, 212, 37));
    }

    #[test]
    fn test_layout_rejects_negative_container() {
        assert!(matches!(
            layout(&CliConfig::new(), Size::new(-1, 200)),
            Err(CliError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_layout_with_huge_gap_does_not_overflow() {
        let config = CliConfig::new().with_gaps(500_000_000, 3);
        config.validate().unwrap();
        let report = layout(&config, Size::new(300, 200)).unwrap();
        assert_eq!(report.keys.len(), 31);
        assert!(report.cell.width < 0);
        assert_eq!(report.preferred.width, i32::MAX);
    }

    #[test]
    fn test_keys_lists_inverted_labels() {
        let entries = keys(&CliConfig::new()).unwrap();
        assert_eq!(entries.len(), 31);
        let sin = entries.iter().find(|e| e.label == "sin").unwrap();
        assert_eq!(sin.position, GridPosition::new(2, 2));
        assert!(sin.inverted_label.is_some());
        let seven = entries.iter().find(|e| e.label == "7").unwrap();
        assert_eq!(seven.inverted_label, None);
    }
}
