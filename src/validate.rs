//! The argument validator: two sequential guard checks over the raw
//! argument sequence, returned as a value so callers decide what a
//! failure means for the process.
use crate::error::{Error, Result};

/// The one flag this program recognizes.
pub const FLAG: &str = "-n";

/// Position of the flag token, counted the way `argv` does with the
/// program name at index 0. Diagnostics report this index.
const FLAG_INDEX: usize = 1;

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedArgs {
    /// The value token that followed `-n`.
    pub value: String,
}

/// Validate the argument sequence supplied to the process, program name
/// excluded.
///
/// The sequence must carry at least a flag token and a value token, and
/// the flag token must be exactly `-n`. Anything after the value token
/// is accepted and ignored.
pub fn validate_args(args: &[String]) -> Result<ValidatedArgs> {
    if args.len() < 2 {
        return Err(Error::MissingArguments);
    }

    if args[0] != FLAG {
        return Err(Error::UnrecognizedFlag {
            value: args[0].clone(),
            index: FLAG_INDEX,
        });
    }

    Ok(ValidatedArgs {
        value: args[1].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_invocation_is_missing_arguments() {
        assert_eq!(validate_args(&args(&[])), Err(Error::MissingArguments));
    }

    #[test]
    fn lone_flag_is_missing_arguments() {
        assert_eq!(validate_args(&args(&["-n"])), Err(Error::MissingArguments));
    }

    #[test]
    fn wrong_flag_reports_value_and_position() {
        assert_eq!(
            validate_args(&args(&["-x", "5"])),
            Err(Error::UnrecognizedFlag {
                value: "-x".to_string(),
                index: 1,
            })
        );
    }

    #[test]
    fn bare_value_is_not_a_flag() {
        assert_eq!(
            validate_args(&args(&["5", "-n"])),
            Err(Error::UnrecognizedFlag {
                value: "5".to_string(),
                index: 1,
            })
        );
    }

    #[test]
    fn flag_with_value_is_accepted() {
        let validated = validate_args(&args(&["-n", "5"])).unwrap();
        assert_eq!(validated.value, "5");
    }

    #[test]
    fn empty_value_is_accepted() {
        let validated = validate_args(&args(&["-n", ""])).unwrap();
        assert_eq!(validated.value, "");
    }

    #[test]
    fn trailing_arguments_are_ignored() {
        let validated = validate_args(&args(&["-n", "5", "extra"])).unwrap();
        assert_eq!(validated.value, "5");
    }
}
