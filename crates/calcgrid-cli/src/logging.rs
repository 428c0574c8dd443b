//! Log subscriber installation

use crate::config::{OutputFormat, Verbosity};
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to the verbosity's directive
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global fmt subscriber on stderr.
///
/// JSON output gets JSON log lines. Verbose levels add targets and source
/// locations. Returns `false` if a subscriber was already installed.
pub fn init(verbosity: Verbosity, format: OutputFormat) -> bool {
    let detailed = verbosity.is_verbose();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(detailed)
        .with_file(detailed)
        .with_line_number(detailed);

    match format {
        OutputFormat::Text => builder.try_init().is_ok(),
        OutputFormat::Json => builder.json().try_init().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_verbosity() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = env_filter(Verbosity::Verbose).to_string();
        assert!(filter.contains("calcgrid=debug"));
    }

    #[test]
    fn test_init_twice_reports_existing_subscriber() {
        let _ = init(Verbosity::Quiet, OutputFormat::Text);
        assert!(!init(Verbosity::Quiet, OutputFormat::Json));
    }
}
