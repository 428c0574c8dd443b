//! calcgrid CLI library
//!
//! Command-line front end for the calcgrid keypad: evaluate key sequences,
//! inspect the grid layout and list the keys.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod output;

pub use commands::{Cli, Commands, EvalArgs, FormatArg, LayoutArgs};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};

use calcgrid::layout::Size;
use std::io::Write;
use tracing::debug;

/// Merges the configuration file (if any) with command-line flags.
///
/// Flags win over the file.
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };
    if cli.verbose > 0 || cli.quiet {
        config = config.with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet));
    }
    if let Some(format) = cli.format {
        config = config.with_format(format.into());
    }
    Ok(config)
}

/// Runs a parsed command, writing its report to `out`
pub fn run(cli: &Cli, config: &CliConfig, out: &mut impl Write) -> CliResult<()> {
    debug!(command = ?cli.command, "running");
    match &cli.command {
        Commands::Eval(args) => {
            let report = handlers::eval(config, &args.keys, args.trace)?;
            output::render_eval(out, &report, config.format)
        }
        Commands::Layout(args) => {
            let container = Size::new(
                args.width.unwrap_or(config.container.width),
                args.height.unwrap_or(config.container.height),
            );
            let report = handlers::layout(config, container)?;
            output::render_layout(out, &report, config.format)
        }
        Commands::Keys => {
            let keys = handlers::keys(config)?;
            output::render_keys(out, &keys, config.format)
        }
    }
}
