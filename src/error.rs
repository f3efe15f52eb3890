//! Crate-level error type and `Result` alias.
//! Provides semantic variants for the two ways an invocation can fail
//! validation; the `Display` output is the diagnostic text minus its
//! final newline.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid number of args, for v{version}\n!", version = crate::VERSION)]
    MissingArguments,

    #[error("{value} is a wrong param at index {index} for v{version}.", version = crate::VERSION)]
    UnrecognizedFlag { value: String, index: usize },
}
