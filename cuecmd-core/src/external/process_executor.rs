// ============================================================================
// cuecmd-core/src/external/process_executor.rs
// ============================================================================
//
// PROCESS EXECUTOR: Spawning `cue` and capturing its streams
//
// The child gets three pipes. Standard input is written from a scoped thread
// while the calling thread drains standard output and standard error through
// `wait_with_output`, so neither side can block on a full pipe buffer. The
// call returns only after the child has been waited on.
//
// AI-ASSISTANT-INFO: Real CueExecutor implementation using std::process

use super::CueExecutor;
use crate::command::Invocation;
use crate::config::DEFAULT_CUE_BINARY;
use crate::error::{CoreError, CoreResult, command_start_error};
use crate::outcome::{Outcome, exit_code_of};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// Runs invocations against a `cue` binary on this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessExecutor {
    binary: PathBuf,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_CUE_BINARY)
    }
}

impl ProcessExecutor {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl CueExecutor for ProcessExecutor {
    fn execute(&self, invocation: &Invocation) -> CoreResult<Outcome> {
        let program = self.binary.to_string_lossy().into_owned();
        let argv = invocation.argv(&program);
        log::debug!("Running command: {}", argv.join(" "));

        let mut child = Command::new(&self.binary)
            .args(&invocation.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                log::error!("Failed to spawn {}: {}", program, e);
                command_start_error(&program, e)
            })?;

        let stdin = child.stdin.take();
        let input = invocation.input.as_slice();

        let (output, written) = thread::scope(|scope| {
            let writer = stdin.map(|mut pipe| {
                scope.spawn(move || -> io::Result<()> {
                    pipe.write_all(input)?;
                    // Dropping the pipe closes it and signals end of input.
                    drop(pipe);
                    Ok(())
                })
            });

            let output = child.wait_with_output();
            let written = match writer {
                Some(handle) => handle
                    .join()
                    .unwrap_or_else(|_| Err(io::Error::other("stdin writer thread panicked"))),
                None => Ok(()),
            };
            (output, written)
        });

        let output = output?;
        match written {
            // The child may exit without consuming all of its input.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("{} closed its input early", program);
            }
            Err(e) => return Err(CoreError::Io(e)),
            Ok(()) => {}
        }

        let exit_code = exit_code_of(output.status);
        log::debug!("{} exited with code {}", program, exit_code);

        Ok(Outcome {
            args: argv,
            exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
            input: invocation.input.clone(),
        })
    }
}
