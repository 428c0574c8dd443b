//! CLI configuration

use crate::error::{CliError, CliResult};
use calcgrid::keypad::Keypad;
use calcgrid::layout::{Insets, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - engine commands and layout passes
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Verbosity for a `-v` count, unless `quiet` wins
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "calcgrid=debug,calcgrid_cli=debug,info",
            Self::Debug => "calcgrid=trace,calcgrid_cli=trace,debug",
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Output format
    pub format: OutputFormat,
    /// Horizontal gap between keys
    pub hgap: i32,
    /// Vertical gap between keys
    pub vgap: i32,
    /// Container insets
    pub insets: Insets,
    /// Preferred size of a single key
    pub button: Size,
    /// Container size used by `layout` when none is given
    pub container: Size,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            format: OutputFormat::Text,
            hgap: Keypad::GAP,
            vgap: Keypad::GAP,
            insets: Insets::ZERO,
            button: Size::new(40, 30),
            container: Size::new(300, 200),
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file; missing fields take defaults
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            CliError::config(format!("cannot read {}: {err}", path.display()))
        })?;
        let config: Self = serde_yaml_ng::from_str(&text)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Rejects negative gaps, insets and sizes
    pub fn validate(&self) -> CliResult<()> {
        if self.hgap < 0 || self.vgap < 0 {
            return Err(CliError::config("gaps must not be negative"));
        }
        let Insets {
            top,
            left,
            bottom,
            right,
        } = self.insets;
        if top.min(left).min(bottom).min(right) < 0 {
            return Err(CliError::config("insets must not be negative"));
        }
        for (name, size) in [("button", self.button), ("container", self.container)] {
            if size.width < 0 || size.height < 0 {
                return Err(CliError::config(format!("{name} size must not be negative")));
            }
        }
        Ok(())
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set both gaps
    #[must_use]
    pub const fn with_gaps(mut self, hgap: i32, vgap: i32) -> Self {
        self.hgap = hgap;
        self.vgap = vgap;
        self
    }

    /// Set container insets
    #[must_use]
    pub const fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Set key preferred size
    #[must_use]
    pub const fn with_button(mut self, button: Size) -> Self {
        self.button = button;
        self
    }

    /// Set container size
    #[must_use]
    pub const fn with_container(mut self, container: Size) -> Self {
        self.container = container;
        self
    }
}
