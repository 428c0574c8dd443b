//! CLI command definitions using clap

use crate::config::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// calcgrid: drive the calculator keypad and inspect its grid layout
#[derive(Parser, Debug)]
#[command(name = "calcgrid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress log output below errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML configuration file
    #[arg(short, long, global = true, env = "CALCGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(long, global = true)]
    pub format: Option<FormatArg>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys on the standard keypad and print the display
    Eval(EvalArgs),

    /// Lay out the standard keypad and print every key's bounds
    Layout(LayoutArgs),

    /// List keypad labels with their grid positions
    Keys,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Key labels, pressed in order (e.g. 2 + 3 '*' 4 =)
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for the layout command
#[derive(Parser, Debug)]
pub struct LayoutArgs {
    /// Container width in pixels
    #[arg(long)]
    pub width: Option<i32>,

    /// Container height in pixels
    #[arg(long)]
    pub height: Option<i32>,
}

/// Output format argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
