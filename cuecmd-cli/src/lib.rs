// cuecmd-cli/src/lib.rs
//
// Library portion of the cuecmd CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, FlagsArgs, RunArgs};
pub use commands::{run_command, run_demo, run_flags};
pub use error::{CliResult, exit_code_for};
