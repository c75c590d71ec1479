// ============================================================================
// cuecmd-core/src/outcome.rs
// ============================================================================
//
// OUTCOME CLASSIFICATION: Turning a finished child process into a result
//
// An `Outcome` is the raw record of one child process: the argument vector,
// its exit code, and the bytes that went in and came out. `check` turns it
// into either the decoded standard output or a `ProcessFailure` describing
// what went wrong.
//
// Exit codes follow one convention throughout: a negative code `-n` means the
// child was killed by signal `n`.
//
// AI-ASSISTANT-INFO: Outcome record, ProcessFailure error, success check

use crate::error::{CoreError, CoreResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::process::ExitStatus;

// ============================================================================
// OUTCOME
// ============================================================================

/// Captured result of running the external tool once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Full argument vector, binary first.
    pub args: Vec<String>,
    /// Exit code; negative values encode the terminating signal.
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Bytes that were written to the child's standard input.
    pub input: Vec<u8>,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn command_line(&self) -> String {
        self.args.join(" ")
    }
}

/// Converts an exit status into the signed exit code convention.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    // Neither an exit code nor a signal: report a generic failure.
    -1
}

// ============================================================================
// SIGNAL NAMES
// ============================================================================

/// Name of signal `number` on this host, if it has one.
#[cfg(unix)]
pub fn signal_name(number: i32) -> Option<&'static str> {
    nix::sys::signal::Signal::try_from(number)
        .ok()
        .map(|signal| signal.as_str())
}

/// Name of signal `number` on this host, if it has one.
#[cfg(not(unix))]
pub fn signal_name(_number: i32) -> Option<&'static str> {
    None
}

// ============================================================================
// PROCESS FAILURE
// ============================================================================

/// A child process that exited with a non-zero status or died from a signal.
///
/// Can only be built from an unsuccessful [`Outcome`]; see
/// [`ProcessFailure::from_outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessFailure {
    args: Vec<String>,
    exit_code: i32,
    #[serde(serialize_with = "lossy_utf8")]
    stdout: Vec<u8>,
    #[serde(serialize_with = "lossy_utf8")]
    stderr: Vec<u8>,
    #[serde(serialize_with = "lossy_utf8")]
    input: Vec<u8>,
}

impl ProcessFailure {
    /// Captures the diagnostics of a failed outcome.
    ///
    /// Fails with `NotAFailure` when the outcome exited with 0: a failure never
    /// represents success.
    pub fn from_outcome(outcome: Outcome) -> CoreResult<Self> {
        if outcome.success() {
            return Err(CoreError::NotAFailure(outcome.command_line()));
        }
        Ok(Self {
            args: outcome.args,
            exit_code: outcome.exit_code,
            stdout: outcome.stdout,
            stderr: outcome.stderr,
            input: outcome.input,
        })
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// The terminating signal, when the child was killed.
    pub fn signal(&self) -> Option<i32> {
        (self.exit_code < 0).then(|| -self.exit_code)
    }

    fn status_context(&self) -> String {
        match self.signal() {
            Some(number) => match signal_name(number) {
                Some(name) => format!("died with {name}."),
                None => format!("died with unknown signal {number}."),
            },
            None => format!("returned non-zero exit status {}.", self.exit_code),
        }
    }
}

impl fmt::Display for ProcessFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subprocess {} {}",
            self.args.join(" "),
            self.status_context()
        )?;

        let sections = [
            ("input", &self.input),
            ("error", &self.stderr),
            ("output", &self.stdout),
        ];
        for (label, bytes) in sections {
            if !bytes.is_empty() {
                write!(f, "\n\t{label}:\t{}", String::from_utf8_lossy(bytes))?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ProcessFailure {}

impl TryFrom<Outcome> for ProcessFailure {
    type Error = CoreError;

    fn try_from(outcome: Outcome) -> Result<Self, Self::Error> {
        ProcessFailure::from_outcome(outcome)
    }
}

fn lossy_utf8<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

// ============================================================================
// CHECK
// ============================================================================

/// Classifies an outcome.
///
/// Returns the decoded standard output on exit code 0. Otherwise logs the
/// failure once at error level and returns it as `CoreError::ProcessFailure`.
pub fn check(outcome: Outcome) -> CoreResult<String> {
    if outcome.success() {
        let command_line = outcome.command_line();
        return String::from_utf8(outcome.stdout)
            .map_err(|e| CoreError::InvalidOutput(command_line, e));
    }

    let failure = ProcessFailure::from_outcome(outcome)?;
    log::error!("{failure}");
    Err(failure.into())
}
