// ============================================================================
// cuecmd-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Running the `cue` binary
//
// This module encapsulates every interaction with the external `cue` process.
// Execution goes through the `CueExecutor` trait so callers and tests can
// substitute their own implementation.
//
// KEY COMPONENTS:
// - CueExecutor: trait turning an `Invocation` into an `Outcome`
// - ProcessExecutor: concrete implementation spawning the real binary
// - check_dependency: verifies the binary can be started
// - mocks: recording executor for tests (feature `test-mocks`)
//
// AI-ASSISTANT-INFO: External process execution for the cue binary

// ---- Internal crate imports ----
use crate::command::Invocation;
use crate::error::{CoreResult, command_start_error};
use crate::outcome::Outcome;

// ---- Standard library imports ----
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Spawns the real `cue` binary
pub mod process_executor;

/// Recording executor with scripted responses
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

pub use process_executor::ProcessExecutor;

// ============================================================================
// EXECUTION ABSTRACTION
// ============================================================================

/// Something that can run a built [`Invocation`] to completion.
///
/// Implementations must not treat a non-zero exit as an error: the returned
/// [`Outcome`] is classified afterwards by [`crate::outcome::check`]. Errors
/// are reserved for failures to run the process at all.
pub trait CueExecutor {
    fn execute(&self, invocation: &Invocation) -> CoreResult<Outcome>;
}

impl<E: CueExecutor + ?Sized> CueExecutor for &E {
    fn execute(&self, invocation: &Invocation) -> CoreResult<Outcome> {
        (**self).execute(invocation)
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that `binary` exists and can be started.
///
/// Runs `<binary> version` with both output streams discarded. The exit
/// status is ignored; only the ability to start the process matters.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the binary is not on the path
/// * `CoreError::CommandStart` - the binary exists but could not be started
pub fn check_dependency(binary: &Path) -> CoreResult<()> {
    let name = binary.to_string_lossy();

    match Command::new(binary)
        .arg("version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) => {
            log::debug!("Found dependency {} ({})", name, status);
            Ok(())
        }
        Err(e) => {
            log::warn!("Dependency '{}' could not be started: {}", name, e);
            Err(command_start_error(&name, e))
        }
    }
}
