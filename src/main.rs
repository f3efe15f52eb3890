//! nflag CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: collect the process
//! arguments, validate them, and exit with the status the runner
//! decides. For programmatic use, prefer the library API
//! (`nflag::validate_args`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::run(&args)
}
