//! Assembly of complete `cue` invocations.
//!
//! The operand order is fixed by the tool's grammar:
//!
//! ```text
//! <subcommand> [file operands] [input operand] [subcommand flags] [global flags]
//! ```

use crate::error::{CoreError, CoreResult};
use crate::files::{FileSet, Input, Mode};
use crate::flags::{DefFlags, EvalFlags, GlobalFlags, OptionSet, OptionSpec, VetFlags};
use std::fmt;
use std::str::FromStr;

/// Supported `cue` subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    /// Evaluate, validate and print a configuration.
    Eval,
    /// Print consolidated definitions.
    Def,
    /// Validate data against a schema.
    Vet,
}

impl Subcommand {
    pub const ALL: [Subcommand; 3] = [Subcommand::Eval, Subcommand::Def, Subcommand::Vet];

    pub fn as_str(self) -> &'static str {
        match self {
            Subcommand::Eval => "eval",
            Subcommand::Def => "def",
            Subcommand::Vet => "vet",
        }
    }

    /// Options accepted by this subcommand, excluding global flags.
    pub fn schema(self) -> &'static [OptionSpec] {
        match self {
            Subcommand::Eval => EvalFlags::SCHEMA,
            Subcommand::Def => DefFlags::SCHEMA,
            Subcommand::Vet => VetFlags::SCHEMA,
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcommand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subcommand::ALL
            .into_iter()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| CoreError::UnsupportedSubcommand(s.to_string()))
    }
}

/// Everything handed to the child process for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub subcommand: Subcommand,
    /// Operands after the binary name; the first is the subcommand.
    pub args: Vec<String>,
    /// Bytes written to the child's standard input.
    pub input: Vec<u8>,
}

impl Invocation {
    /// Full argument vector, binary first.
    pub fn argv(&self, binary: &str) -> Vec<String> {
        std::iter::once(binary.to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Builder for a single `cue` invocation.
#[derive(Debug, Clone)]
pub struct CueCommand {
    subcommand: Subcommand,
    input: Option<Input>,
    files: Option<FileSet>,
    flags: Option<OptionSet>,
    global_flags: Option<OptionSet>,
}

impl CueCommand {
    #[must_use]
    pub fn new(subcommand: Subcommand) -> Self {
        Self {
            subcommand,
            input: None,
            files: None,
            flags: None,
            global_flags: None,
        }
    }

    /// Sets what `cue` reads from standard input.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<Input>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the file operands.
    #[must_use]
    pub fn with_files(mut self, files: impl Into<FileSet>) -> Self {
        self.files = Some(files.into());
        self
    }

    /// Sets the subcommand's own flags.
    #[must_use]
    pub fn with_flags(mut self, flags: impl Into<OptionSet>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    /// Sets the global flags.
    #[must_use]
    pub fn with_global_flags(mut self, flags: GlobalFlags) -> Self {
        self.global_flags = Some(flags.into());
        self
    }

    /// Sets the global flags from an already populated set.
    #[must_use]
    pub fn with_global_option_set(mut self, flags: OptionSet) -> Self {
        self.global_flags = Some(flags);
        self
    }

    /// Renders the invocation.
    ///
    /// Fails before anything is spawned with `SchemaMismatch` when an option
    /// set belongs to another subcommand (or is not the global set), with
    /// `InvalidOptionValue` when a flag value does not match its declared
    /// kind, and with `NonUtf8Path` for a path that is not UTF-8.
    pub fn build(&self) -> CoreResult<Invocation> {
        let mut args = vec![self.subcommand.as_str().to_string()];

        if let Some(files) = &self.files {
            args.extend(files.render(Mode::Input)?);
        }
        if let Some(input) = &self.input {
            args.extend(input.render()?);
        }
        if let Some(flags) = &self.flags {
            require_schema(flags, self.subcommand.as_str(), self.subcommand.schema())?;
            args.extend(flags.to_args()?);
        }
        if let Some(global) = &self.global_flags {
            require_schema(global, GlobalFlags::LABEL, GlobalFlags::SCHEMA)?;
            args.extend(global.to_args()?);
        }

        let input = self.input.as_ref().map(Input::encode).unwrap_or_default();

        log::debug!("Built cue invocation: {}", args.join(" "));
        Ok(Invocation {
            subcommand: self.subcommand,
            args,
            input,
        })
    }
}

fn require_schema(
    flags: &OptionSet,
    expected: &str,
    schema: &'static [OptionSpec],
) -> CoreResult<()> {
    if flags.is_for(schema) {
        Ok(())
    } else {
        Err(CoreError::SchemaMismatch {
            expected: expected.to_string(),
            found: flags.label().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::{Encoding, File, FileArg, Stdin};
    use crate::flags::OptionValue;

    #[test]
    fn test_eval_expression_invocation() {
        let invocation = CueCommand::new(Subcommand::Eval)
            .with_input(r#"a: [ "a", "b", "c" ]"#)
            .with_flags(EvalFlags {
                expression: Some(vec!["a[0]".to_string(), "a[1]".to_string()]),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(
            invocation.args,
            vec!["eval", "-", "--expression=a[0]", "--expression=a[1]"]
        );
        assert_eq!(invocation.input, br#"a: [ "a", "b", "c" ]"#.to_vec());
    }

    #[test]
    fn test_operand_order() {
        let invocation = CueCommand::new(Subcommand::Vet)
            .with_global_flags(GlobalFlags {
                strict: true,
                ..Default::default()
            })
            .with_flags(VetFlags {
                concrete: true,
                ..Default::default()
            })
            .with_input(Stdin::new("{\"a\": 1}").with_encoding(Encoding::Json))
            .with_files(FileSet::from(vec![
                FileArg::from("schema.cue"),
                FileArg::from(File::new("data.yaml").with_encoding(Encoding::Yaml)),
            ]))
            .build()
            .unwrap();

        assert_eq!(
            invocation.args,
            vec![
                "vet",
                "schema.cue",
                "yaml:",
                "data.yaml",
                "json:",
                "-",
                "--concrete",
                "--strict",
            ]
        );
        assert_eq!(invocation.input, b"{\"a\": 1}".to_vec());
    }

    #[test]
    fn test_no_input_means_no_operand_and_no_bytes() {
        let invocation = CueCommand::new(Subcommand::Def)
            .with_files("defs.cue")
            .build()
            .unwrap();
        assert_eq!(invocation.args, vec!["def", "defs.cue"]);
        assert!(invocation.input.is_empty());
    }

    #[test]
    fn test_empty_text_input_still_reads_stdin() {
        let invocation = CueCommand::new(Subcommand::Eval)
            .with_input("")
            .build()
            .unwrap();
        assert_eq!(invocation.args, vec!["eval", "-"]);
        assert!(invocation.input.is_empty());
    }

    #[test]
    fn test_invalid_value_fails_before_spawn() {
        let flags = OptionSet::from_values(
            "eval",
            EvalFlags::SCHEMA,
            vec![OptionValue::Absent, OptionValue::Str("yes".to_string())],
        )
        .unwrap();
        let err = CueCommand::new(Subcommand::Eval)
            .with_flags(flags)
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidOptionValue { ref flag, .. } if flag == "--concrete"));
    }

    #[test]
    fn test_flags_of_another_subcommand_are_rejected() {
        let err = CueCommand::new(Subcommand::Vet)
            .with_flags(EvalFlags {
                show_hidden: true,
                ..Default::default()
            })
            .build()
            .unwrap_err();
        match err {
            CoreError::SchemaMismatch { expected, found } => {
                assert_eq!(expected, "vet");
                assert_eq!(found, "eval");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_set_is_not_global() {
        let eval_options = OptionSet::for_subcommand(Subcommand::Eval)
            .with("out", "json")
            .unwrap();
        let err = CueCommand::new(Subcommand::Eval)
            .with_global_option_set(eval_options)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::SchemaMismatch { ref expected, ref found } if expected == "global" && found == "eval"
        ));

        let global = OptionSet::global().with("strict", true).unwrap();
        let invocation = CueCommand::new(Subcommand::Eval)
            .with_global_option_set(global)
            .build()
            .unwrap();
        assert_eq!(invocation.args, vec!["eval", "--strict"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = std::path::PathBuf::from(OsStr::from_bytes(b"data-\xff.json"));
        let err = CueCommand::new(Subcommand::Vet)
            .with_files(path)
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::NonUtf8Path(_)));
    }

    #[test]
    fn test_argv_prepends_binary() {
        let invocation = CueCommand::new(Subcommand::Eval)
            .with_input("x: 1")
            .build()
            .unwrap();
        assert_eq!(invocation.argv("cue"), vec!["cue", "eval", "-"]);
    }

    #[test]
    fn test_subcommand_from_str() {
        assert_eq!("vet".parse::<Subcommand>().unwrap(), Subcommand::Vet);
        assert!(matches!(
            "export".parse::<Subcommand>(),
            Err(CoreError::UnsupportedSubcommand(_))
        ));
    }
}
