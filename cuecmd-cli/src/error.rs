// ============================================================================
// cuecmd-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and exit status mapping
//
// The CLI reuses the core error type. A failed `cue` run exits with the
// child's own status so scripts can tell `cue` failures apart; every other
// error (bad option, missing binary, I/O) exits with 1.
//
// AI-ASSISTANT-INFO: CLI error handling utilities

use cuecmd_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit status used for errors that are not a `cue` exit status.
pub const GENERIC_FAILURE: i32 = 1;

/// Maps an error to the process exit status.
///
/// Children killed by a signal report a negative code; those map to 1.
pub fn exit_code_for(err: &CoreError) -> i32 {
    match err.as_process_failure() {
        Some(failure) if failure.exit_code() > 0 => failure.exit_code(),
        _ => GENERIC_FAILURE,
    }
}
