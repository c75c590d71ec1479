// ============================================================================
// cuecmd-core/src/runner.rs
// ============================================================================
//
// RUNNER: One call per `cue` subcommand
//
// `Cue` ties the pieces together: build the invocation, execute it, classify
// the outcome. Each call is independent; a `Cue` holds no per-call state and
// can be shared between threads whenever its executor can.
//
// AI-ASSISTANT-INFO: High-level eval/def/vet entry points

use crate::command::{CueCommand, Subcommand};
use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::{CueExecutor, ProcessExecutor, check_dependency};
use crate::files::{FileSet, Input};
use crate::flags::{DefFlags, EvalFlags, GlobalFlags, OptionSet, VetFlags};
use crate::outcome;

/// Arguments of a single subcommand call.
///
/// `F` is the subcommand's flag record.
#[derive(Debug, Clone, Default)]
pub struct Request<F> {
    pub input: Option<Input>,
    pub files: Option<FileSet>,
    pub flags: F,
    pub global_flags: GlobalFlags,
}

impl<F: Default> Request<F> {
    pub fn new() -> Self {
        Self {
            input: None,
            files: None,
            flags: F::default(),
            global_flags: GlobalFlags::default(),
        }
    }
}

impl<F> Request<F> {
    #[must_use]
    pub fn with_input(mut self, input: impl Into<Input>) -> Self {
        self.input = Some(input.into());
        self
    }

    #[must_use]
    pub fn with_files(mut self, files: impl Into<FileSet>) -> Self {
        self.files = Some(files.into());
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: F) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_global_flags(mut self, global_flags: GlobalFlags) -> Self {
        self.global_flags = global_flags;
        self
    }
}

impl<F: Into<OptionSet>> Request<F> {
    fn into_command(self, subcommand: Subcommand) -> CueCommand {
        let mut command = CueCommand::new(subcommand)
            .with_flags(self.flags)
            .with_global_flags(self.global_flags);
        if let Some(input) = self.input {
            command = command.with_input(input);
        }
        if let Some(files) = self.files {
            command = command.with_files(files);
        }
        command
    }
}

/// Entry point for running `cue` subcommands.
#[derive(Debug, Clone, Default)]
pub struct Cue<E = ProcessExecutor> {
    executor: E,
}

impl Cue<ProcessExecutor> {
    /// Creates a runner for the configured binary.
    ///
    /// Validates the configuration and, when `check_binary` is set, verifies
    /// that the binary can be started.
    pub fn from_config(config: &CoreConfig) -> CoreResult<Self> {
        config.validate()?;
        if config.check_binary {
            check_dependency(&config.cue_binary)?;
        }
        Ok(Self::with_executor(ProcessExecutor::new(&config.cue_binary)))
    }
}

impl<E: CueExecutor> Cue<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Builds, runs and checks one command, returning its standard output.
    pub fn run(&self, command: &CueCommand) -> CoreResult<String> {
        let invocation = command.build()?;
        let outcome = self.executor.execute(&invocation)?;
        outcome::check(outcome)
    }

    /// Evaluates, validates and prints a configuration.
    ///
    /// Printing is skipped if validation fails. The `expression` flag
    /// evaluates an expression within the configuration instead of the whole
    /// configuration.
    pub fn eval(&self, request: Request<EvalFlags>) -> CoreResult<String> {
        self.run(&request.into_command(Subcommand::Eval))
    }

    /// Prints consolidated definitions.
    pub fn def(&self, request: Request<DefFlags>) -> CoreResult<String> {
        self.run(&request.into_command(Subcommand::Def))
    }

    /// Validates data; output is normally empty on success.
    pub fn vet(&self, request: Request<VetFlags>) -> CoreResult<String> {
        self.run(&request.into_command(Subcommand::Vet))
    }
}
