// ============================================================================
// cuecmd-cli/src/commands/run.rs
// ============================================================================
//
// RUN COMMAND: `cuecmd eval|def|vet`
//
// Translates `RunArgs` into a `CueCommand`, runs it through `Cue` and prints
// the output. `--flag` settings are resolved against the subcommand's schema
// first and the global schema second.
//
// AI-ASSISTANT-INFO: eval/def/vet command handler

use crate::cli::RunArgs;
use crate::error::CliResult;
use crate::terminal;
use cuecmd_core::{
    CoreConfig, CoreError, Cue, CueCommand, CueExecutor, FileSet, Input, OptionSet, Stdin,
    Subcommand,
};
use log::{debug, warn};
use std::io::{self, Read};

/// Options resolved from the repeatable `--flag` arguments.
#[derive(Debug, Clone)]
pub struct ResolvedFlags {
    pub flags: OptionSet,
    pub global_flags: OptionSet,
}

/// Resolves `NAME[=VALUE]` settings for `subcommand`.
///
/// A name unknown to both the subcommand and the global schema is reported
/// against the subcommand.
pub fn resolve_flags(subcommand: Subcommand, settings: &[String]) -> CliResult<ResolvedFlags> {
    let mut flags = OptionSet::for_subcommand(subcommand);
    let mut global_flags = OptionSet::global();

    for setting in settings {
        let (name, raw) = match setting.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (setting.as_str(), None),
        };

        if flags.spec(name).is_some() {
            flags.apply(name, raw)?;
        } else if global_flags.spec(name).is_some() {
            global_flags.apply(name, raw)?;
        } else {
            return Err(CoreError::UnknownOption {
                schema: flags.label().to_string(),
                name: name.to_string(),
            });
        }
    }

    Ok(ResolvedFlags {
        flags,
        global_flags,
    })
}

/// Builds the command described by `args`.
///
/// `read_stdin` supplies this process's standard input when `--stdin` is set.
pub fn build_command(
    subcommand: Subcommand,
    args: &RunArgs,
    read_stdin: impl FnOnce() -> io::Result<String>,
) -> CliResult<CueCommand> {
    let resolved = resolve_flags(subcommand, &args.flags)?;

    let mut command = CueCommand::new(subcommand)
        .with_flags(resolved.flags)
        .with_global_option_set(resolved.global_flags);

    if !args.files.is_empty() {
        command = command.with_files(FileSet::Many(args.files.clone()));
    }

    let text = if args.stdin {
        Some(read_stdin()?)
    } else {
        args.text.clone()
    };

    match (text, args.input_encoding) {
        (Some(text), Some(encoding)) => {
            command = command.with_input(Stdin::new(text).with_encoding(encoding));
        }
        (Some(text), None) => command = command.with_input(Input::Text(text)),
        (None, Some(encoding)) => {
            warn!("--input-encoding {encoding} ignored: no --text or --stdin given");
        }
        (None, None) => {}
    }

    Ok(command)
}

/// Runs `command` and prints its output.
///
/// With `json`, a failed run is also printed on stdout as a JSON object.
pub fn execute<E: CueExecutor>(cue: &Cue<E>, command: &CueCommand, json: bool) -> CliResult<()> {
    match cue.run(command) {
        Ok(output) => {
            terminal::print_output(&output)?;
            Ok(())
        }
        Err(err) => {
            if json {
                if let Some(failure) = err.as_process_failure() {
                    let rendered = serde_json::to_string(failure)
                        .map_err(|e| CoreError::Config(format!("failed to render failure: {e}")))?;
                    println!("{rendered}");
                }
            }
            Err(err)
        }
    }
}

/// Entry point for `cuecmd eval|def|vet`.
pub fn run_command(subcommand: Subcommand, args: &RunArgs, config: &CoreConfig) -> CliResult<()> {
    let command = build_command(subcommand, args, || {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    })?;

    let cue = Cue::from_config(config)?;
    debug!("Running {subcommand} with {}", cue.executor().binary().display());
    execute(&cue, &command, args.json)
}
