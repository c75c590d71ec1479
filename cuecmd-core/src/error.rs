// ============================================================================
// cuecmd-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the cuecmd core library
//
// Every fallible operation in the crate returns `CoreResult<T>`. Programmer
// errors (bad option values, unknown option names) are raised before any
// process is spawned; process failures carry the full diagnostic context of
// the child that produced them.
//
// AI-ASSISTANT-INFO: Core error enum and helpers

use crate::outcome::ProcessFailure;
use std::io;

/// Errors produced by the cuecmd core library.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// An option value does not match the option's declared kind.
    #[error("invalid: {flag}: {kind} = {value}")]
    InvalidOptionValue {
        flag: String,
        kind: String,
        value: String,
    },

    /// An option name is not part of the schema it was set on.
    #[error("unknown option '{name}' for {schema}")]
    UnknownOption { schema: String, name: String },

    /// A textual option kind does not name a supported shape.
    #[error("unsupported option kind: {0}")]
    UnsupportedOptionKind(String),

    /// A textual encoding tag does not name a supported encoding.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// An option set bound to one schema was used where another is required.
    #[error("option set for {found} cannot be used as {expected} options")]
    SchemaMismatch { expected: String, found: String },

    /// More values were supplied than the schema declares options.
    #[error("{schema} declares {expected} options, got {found} values")]
    ValueCountMismatch {
        schema: String,
        expected: usize,
        found: usize,
    },

    /// A path cannot be passed on the command line as UTF-8 text.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(std::path::PathBuf),

    /// A textual subcommand name is not one the layer knows how to build.
    #[error("unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),

    /// The child process exited unsuccessfully.
    #[error("{0}")]
    ProcessFailure(Box<ProcessFailure>),

    /// A failure was requested for an outcome that succeeded.
    #[error("Invalid return code 0 for subprocess {0}")]
    NotAFailure(String),

    #[error("Required external command '{0}' not found")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Output of '{0}' is not valid UTF-8: {1}")]
    InvalidOutput(String, #[source] std::string::FromUtf8Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<ProcessFailure> for CoreError {
    fn from(failure: ProcessFailure) -> Self {
        CoreError::ProcessFailure(Box::new(failure))
    }
}

impl CoreError {
    /// Returns the process failure carried by this error, if any.
    pub fn as_process_failure(&self) -> Option<&ProcessFailure> {
        match self {
            CoreError::ProcessFailure(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Result type for cuecmd core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Maps a spawn error into the matching `CoreError`.
///
/// A missing binary becomes `DependencyNotFound`; anything else is reported as
/// a start failure with the underlying I/O error attached.
pub fn command_start_error(cmd_name: &str, err: io::Error) -> CoreError {
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(cmd_name.to_string())
    } else {
        CoreError::CommandStart(cmd_name.to_string(), err)
    }
}
