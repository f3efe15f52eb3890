#![doc = r#"
nflag — a strict validator for the `-n <value>` invocation shape.

This crate checks the argument list handed to a process against one
accepted shape, `-n <value>`, and reports a specific failure for
anything else. It powers the `nflag` binary and can be embedded in your
own front door: the validator is a pure function, so your entry point
decides what a failure means for the process.

Invocation contract
-------------------
- Fewer than two arguments (program name excluded) is a
  missing-arguments failure.
- A first argument other than the literal `-n` is an unrecognized-flag
  failure, reported with the offending token and its position.
- `-n <value>` is accepted; tokens after the value are ignored.

Quick start
-----------
```rust
use nflag::validate_args;

let args = vec!["-n".to_string(), "5".to_string()];
let validated = validate_args(&args).unwrap();
assert_eq!(validated.value, "5");
```

Error handling
--------------
Both failures are plain values; match on [`Error`] to handle them, or
display one to get the diagnostic the CLI prints.

```rust
use nflag::{validate_args, Error};

let args = vec!["-x".to_string(), "5".to_string()];
match validate_args(&args) {
    Ok(validated) => println!("value: {}", validated.value),
    Err(Error::MissingArguments) => eprintln!("usage: nflag -n <value>"),
    Err(err @ Error::UnrecognizedFlag { .. }) => eprintln!("{err}"),
}
```

Diagnostics carry the package version, available as [`VERSION`].

Useful modules
--------------
- [`validate`] — the validator and its `ValidatedArgs` success value.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod error;
pub mod validate;

pub use error::{Error, Result};
pub use validate::{FLAG, ValidatedArgs, validate_args};

/// Version string baked into every diagnostic, injected from the build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
