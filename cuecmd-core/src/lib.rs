//! Core library for running the CUE command-line tool from Rust.
//!
//! This crate turns typed flag records and input descriptors into `cue`
//! argument vectors, runs the binary with its standard streams piped, and
//! converts the exit status into either the decoded output or a descriptive
//! [`ProcessFailure`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use cuecmd_core::{Cue, CoreConfig, EvalFlags, Request};
//!
//! let cue = Cue::from_config(&CoreConfig::from_env()).unwrap();
//! let output = cue
//!     .eval(
//!         Request::new()
//!             .with_input(r#"a: [ "a", "b", "c" ]"#)
//!             .with_flags(EvalFlags {
//!                 expression: Some(vec!["a[0]".to_string(), "a[1]".to_string()]),
//!                 ..Default::default()
//!             }),
//!     )
//!     .unwrap();
//! print!("{output}");
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod external;
pub mod files;
pub mod flags;
pub mod outcome;
pub mod runner;

// Re-exports for public API
pub use command::{CueCommand, Invocation, Subcommand};
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{CueExecutor, ProcessExecutor, check_dependency};
pub use files::{Encoding, File, FileArg, FileSet, Input, Mode, Stdin};
pub use flags::{
    DefFlags, EvalFlags, GlobalFlags, OptionKind, OptionSet, OptionSpec, OptionValue, VetFlags,
    flag_name,
};
pub use outcome::{Outcome, ProcessFailure, check};
pub use runner::{Cue, Request};
