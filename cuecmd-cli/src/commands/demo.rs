// ============================================================================
// cuecmd-cli/src/commands/demo.rs
// ============================================================================
//
// DEMO COMMAND: `cuecmd demo`
//
// Runs a handful of evaluations against the configured `cue` binary and
// prints each result. Useful as a smoke test of a CUE installation.
//
// AI-ASSISTANT-INFO: Sample evaluations

use crate::error::CliResult;
use crate::terminal;
use cuecmd_core::{
    CoreConfig, Cue, CueCommand, CueExecutor, EvalFlags, OptionSet, Stdin, Subcommand,
};

const LIST: &str = r#"a: [ "a", "b", "c" ]"#;

/// The sample commands, in the order they are run.
pub fn samples() -> CliResult<Vec<CueCommand>> {
    let two_expressions = EvalFlags {
        expression: Some(vec!["a[0]".to_string(), "a[1]".to_string()]),
        ..Default::default()
    };
    let first_element = OptionSet::for_subcommand(Subcommand::Eval).with("expression", "a[0]")?;

    Ok(vec![
        CueCommand::new(Subcommand::Eval)
            .with_input(LIST)
            .with_flags(two_expressions),
        CueCommand::new(Subcommand::Eval)
            .with_input(LIST)
            .with_flags(first_element.clone()),
        CueCommand::new(Subcommand::Eval)
            .with_input(format!("{LIST}\r\na: [\"a\", ...string]"))
            .with_flags(first_element.clone()),
        CueCommand::new(Subcommand::Eval)
            .with_input(Stdin::new(LIST))
            .with_flags(first_element),
    ])
}

/// Runs every sample, stopping at the first failure.
pub fn run_samples<E: CueExecutor>(cue: &Cue<E>) -> CliResult<()> {
    for command in samples()? {
        let output = cue.run(&command)?;
        terminal::print_output(&output)?;
        if !output.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

/// Entry point for `cuecmd demo`.
pub fn run_demo(config: &CoreConfig) -> CliResult<()> {
    let cue = Cue::from_config(config)?;
    run_samples(&cue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuecmd_core::external::mocks::MockExecutor;

    #[test]
    fn test_samples_render() {
        let args: Vec<Vec<String>> = samples()
            .unwrap()
            .iter()
            .map(|command| command.build().unwrap().args)
            .collect();

        assert_eq!(
            args[0],
            vec!["eval", "-", "--expression=a[0]", "--expression=a[1]"]
        );
        assert_eq!(args[1], vec!["eval", "-", "--expression=a[0]"]);
        assert_eq!(args[2], args[1]);
        assert_eq!(args[3], args[1]);
    }

    #[test]
    fn test_run_samples_stops_on_failure() {
        let mock = MockExecutor::new();
        mock.add_success("\"a\"\n\"b\"\n");
        mock.add_exit_error(1, "a: conflicting values");
        let cue = Cue::with_executor(&mock);

        assert!(run_samples(&cue).is_err());
        let calls = mock.get_received_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].input, LIST.as_bytes().to_vec());
    }
}
