//! calcgrid CLI: drive the calculator keypad from the command line
//!
//! ## Usage
//!
//! ```bash
//! calcgrid eval 2 + 3 '*' 4 =        # prints 20
//! calcgrid eval --trace 1 2 push pop # display after every key
//! calcgrid layout --width 300 --height 200
//! calcgrid --format json keys
//! ```

use calcgrid_cli::{build_config, logging, run, Cli, CliResult};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init(config.verbosity, config.format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &config, &mut out)
}
