// ============================================================================
// cuecmd-cli/src/cli.rs
// ============================================================================
//
// COMMAND LINE DEFINITION: clap structures for the cuecmd binary
//
// Every `cue` subcommand gets the same argument shape (`RunArgs`); the
// subcommand's own options are passed with repeatable `--flag NAME[=VALUE]`
// arguments and checked against the subcommand's schema before anything runs.
//
// AI-ASSISTANT-INFO: CLI argument structures (clap derive)

use clap::{Args, Parser, Subcommand};
use cuecmd_core::{Encoding, FileArg};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "cuecmd: structured front end for the CUE command-line tool",
    long_about = "Builds `cue eval`, `cue def` and `cue vet` invocations from typed options \
                  via the cuecmd-core library and reports failures with full diagnostics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path or name of the `cue` binary
    #[arg(long, global = true, value_name = "PATH", env = "CUECMD_BINARY")]
    pub cue_binary: Option<PathBuf>,

    /// Verify that the `cue` binary starts before running anything
    #[arg(long, global = true, default_value_t = false)]
    pub check_binary: bool,

    /// Enable debug logging (shows every argument vector)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate, validate and print a configuration (`cue eval`)
    Eval(RunArgs),
    /// Print consolidated definitions (`cue def`)
    Def(RunArgs),
    /// Validate data (`cue vet`)
    Vet(RunArgs),
    /// List the options a subcommand accepts
    Flags(FlagsArgs),
    /// Run a few sample evaluations
    Demo,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// File operands, optionally qualified as ENCODING:PATH (json, yaml, txt)
    #[arg(value_name = "FILE", value_parser = parse_file_arg)]
    pub files: Vec<FileArg>,

    /// Text passed to `cue` on standard input
    #[arg(long, value_name = "TEXT", conflicts_with = "stdin")]
    pub text: Option<String>,

    /// Forward this process's standard input to `cue`
    #[arg(long, default_value_t = false)]
    pub stdin: bool,

    /// Encoding qualifier for the standard input operand
    #[arg(long, value_name = "ENCODING", value_parser = parse_encoding)]
    pub input_encoding: Option<Encoding>,

    /// Option for the subcommand or a global option, as NAME or NAME=VALUE
    #[arg(short = 'F', long = "flag", value_name = "NAME[=VALUE]")]
    pub flags: Vec<String>,

    /// Print failures as JSON on standard output
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FlagsArgs {
    /// Subcommand whose options to list (eval, def, vet)
    #[arg(value_name = "SUBCOMMAND", value_parser = parse_subcommand)]
    pub subcommand: cuecmd_core::Subcommand,

    /// Also list the global options
    #[arg(long, default_value_t = false)]
    pub global: bool,

    /// Print the listing as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn parse_file_arg(s: &str) -> Result<FileArg, String> {
    Ok(FileArg::parse(s))
}

fn parse_encoding(s: &str) -> Result<Encoding, String> {
    s.parse().map_err(|e: cuecmd_core::CoreError| e.to_string())
}

fn parse_subcommand(s: &str) -> Result<cuecmd_core::Subcommand, String> {
    s.parse().map_err(|e: cuecmd_core::CoreError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::parse_from([
            "cuecmd",
            "eval",
            "schema.cue",
            "json:data.json",
            "--text",
            "a: 1",
            "-F",
            "expression=a",
            "--flag",
            "concrete",
        ]);
        let Commands::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.files.len(), 2);
        assert!(matches!(args.files[1], FileArg::File(_)));
        assert_eq!(args.text.as_deref(), Some("a: 1"));
        assert_eq!(args.flags, vec!["expression=a", "concrete"]);
    }

    #[test]
    fn test_text_conflicts_with_stdin() {
        let result = Cli::try_parse_from(["cuecmd", "vet", "--text", "a: 1", "--stdin"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["cuecmd", "flags", "export"]).is_err());
        assert!(Cli::try_parse_from(["cuecmd", "flags", "def", "--global"]).is_ok());
    }
}
