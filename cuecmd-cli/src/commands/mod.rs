//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// `demo`: runs sample evaluations against the configured binary.
pub mod demo;
/// `flags`: lists the options of a subcommand.
pub mod flags;
/// `eval`, `def` and `vet`: build and run one `cue` invocation.
pub mod run;

pub use demo::run_demo;
pub use flags::run_flags;
pub use run::run_command;
