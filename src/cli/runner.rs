use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use nflag::validate_args;

/// Validate `args` and decide the process exit status.
///
/// On failure the diagnostic is written to standard error and the
/// status is 1. The success path is silent; trace output appears only
/// when enabled through `RUST_LOG`, and goes to standard error so
/// standard output stays untouched either way.
pub fn run(args: &[String]) -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match validate_args(args) {
        Ok(validated) => {
            debug!("accepted {} with value {:?}", nflag::FLAG, validated.value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
