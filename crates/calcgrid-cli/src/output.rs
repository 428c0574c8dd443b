//! Output rendering for command reports

use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::handlers::{EvalReport, KeyEntry, LayoutReport};
use serde::Serialize;
use std::io::Write;

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes an eval report
pub fn render_eval(out: &mut impl Write, report: &EvalReport, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Text => {
            for step in &report.steps {
                writeln!(out, "{:>8}  {}", step.key, step.display)?;
            }
            writeln!(out, "{}", report.display)?;
            Ok(())
        }
    }
}

/// Writes a layout report
pub fn render_layout(
    out: &mut impl Write,
    report: &LayoutReport,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Text => {
            writeln!(
                out,
                "container {}x{}, cell {}x{}, preferred {}x{}",
                report.container.width,
                report.container.height,
                report.cell.width,
                report.cell.height,
                report.preferred.width,
                report.preferred.height,
            )?;
            for key in &report.keys {
                writeln!(
                    out,
                    "{:<8} {:<8} x={:<4} y={:<4} {}x{}",
                    key.label,
                    key.position.to_string(),
                    key.bounds.x,
                    key.bounds.y,
                    key.bounds.width,
                    key.bounds.height,
                )?;
            }
            Ok(())
        }
    }
}

/// Writes the key listing
pub fn render_keys(out: &mut impl Write, keys: &[KeyEntry], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, keys),
        OutputFormat::Text => {
            for key in keys {
                match key.inverted_label {
                    Some(inverted) => {
                        writeln!(out, "{:<8} {:<8} inv: {inverted}", key.label, key.position.to_string())?;
                    }
                    None => writeln!(out, "{:<8} {}", key.label, key.position)?,
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::handlers;
    use calcgrid::layout::Size;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> CliResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_eval_text() {
        let keys = vec!["7".to_string(), "*".to_string(), "6".to_string(), "=".to_string()];
        let report = handlers::eval(&CliConfig::new(), &keys, true).unwrap();
        let text = rendered(|out| render_eval(out, &report, OutputFormat::Text));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "42");
        assert!(lines[1].trim_start().starts_with('*'));
    }

    #[test]
    fn test_render_eval_json() {
        let keys = vec!["5".to_string(), "push".to_string()];
        let report = handlers::eval(&CliConfig::new(), &keys, false).unwrap();
        let text = rendered(|out| render_eval(out, &report, OutputFormat::Json));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["display"], "5");
        assert_eq!(json["stack"][0], 5.0);
        assert!(json.get("steps").is_none());
    }

    #[test]
    fn test_render_layout_text() {
        let report = handlers::layout(&CliConfig::new(), Size::new(300, 200)).unwrap();
        let text = rendered(|out| render_layout(out, &report, OutputFormat::Text));
        assert!(text.starts_with("container 300x200, cell 40x37"));
        assert!(text.contains("212x37"));
        assert_eq!(text.lines().count(), 32);
    }

    #[test]
    fn test_render_layout_json() {
        let report = handlers::layout(&CliConfig::new(), Size::new(300, 200)).unwrap();
        let text = rendered(|out| render_layout(out, &report, OutputFormat::Json));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["cell"]["width"], 40);
        assert_eq!(json["keys"][0]["label"], "display");
        assert_eq!(json["keys"][0]["bounds"]["width"], 212);
    }

    #[test]
    fn test_render_keys_text() {
        let keys = handlers::keys(&CliConfig::new()).unwrap();
        let text = rendered(|out| render_keys(out, &keys, OutputFormat::Text));
        assert_eq!(text.lines().count(), 31);
        assert!(text.contains("inv: arcsin"));
        assert!(text.lines().any(|line| line.starts_with("res") && line.contains("(2, 7)")));
    }
}
