//! Command Line Interface (CLI) layer for nflag.
//!
//! This module holds the orchestration logic (`runner`) that wires the
//! process argument list to the validator in `nflag::validate` and
//! turns validation failures into diagnostics on standard error.
//!
//! If you are embedding the validator into another application, prefer
//! using `nflag::validate_args` instead of calling the CLI code.
pub mod runner;

pub use runner::run;
