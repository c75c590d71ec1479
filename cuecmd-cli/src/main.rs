// ============================================================================
// cuecmd-cli/src/main.rs
// ============================================================================
//
// CUECMD CLI: Entry point
//
// Parses arguments, sets up logging, resolves the core configuration
// (flags over environment over defaults) and dispatches to the command
// handlers. The process exits with the child's status when `cue` fails.
//
// AI-ASSISTANT-INFO: Main entry point for the cuecmd binary

use clap::Parser;
use cuecmd_core::{CoreConfig, CoreConfigBuilder, CoreError, Subcommand};
use cuecmd_cli::{Cli, Commands, CliResult, exit_code_for, logging, terminal};
use std::process;

fn config_from(cli: &Cli) -> CoreConfig {
    let mut builder = CoreConfigBuilder::new();
    if let Some(binary) = &cli.cue_binary {
        builder = builder.cue_binary(binary);
    }
    if cli.check_binary {
        builder = builder.check_binary(true);
    }
    builder.build()
}

fn dispatch(cli: &Cli) -> CliResult<()> {
    let config = config_from(cli);
    match &cli.command {
        Commands::Eval(args) => cuecmd_cli::run_command(Subcommand::Eval, args, &config),
        Commands::Def(args) => cuecmd_cli::run_command(Subcommand::Def, args, &config),
        Commands::Vet(args) => cuecmd_cli::run_command(Subcommand::Vet, args, &config),
        Commands::Flags(args) => cuecmd_cli::run_flags(args),
        Commands::Demo => cuecmd_cli::run_demo(&config),
    }
}

fn report(err: &CoreError) {
    // Failed runs are already logged with full diagnostics.
    if err.as_process_failure().is_some() && logging::failures_are_logged() {
        return;
    }
    terminal::print_error(&err.to_string());
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = dispatch(&cli) {
        report(&err);
        process::exit(exit_code_for(&err));
    }
}
