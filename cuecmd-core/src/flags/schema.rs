//! Flag records for the supported `cue` subcommands.
//!
//! These track the tool's documented CLI surface. `merge` is forwarded as a
//! plain switch: the tool defaults it to true, and what passing it explicitly
//! does is up to the tool.

flag_record! {
    /// Flags understood by every subcommand, emitted after the subcommand's own.
    pub struct GlobalFlags("global") {
        /// print all available errors
        all_errors: bool,
        /// proceed in the presence of errors
        ignore: bool,
        /// simplify output
        simplify: bool,
        /// report errors for lossy mappings
        strict: bool,
        /// trace computation
        trace: bool,
        /// print information about progress
        verbose: bool,
    }
}

flag_record! {
    /// Flags for `cue eval`.
    pub struct EvalFlags("eval") {
        /// show optional and hidden fields
        all: bool,
        /// require the evaluation to be concrete
        concrete: bool,
        /// evaluate this expression only
        expression: Option<Vec<String>>,
        /// help for eval
        help: bool,
        /// set the value of a tagged field
        inject: Option<Vec<String>>,
        /// concatenate multiple objects into a list
        list: bool,
        /// merge non-CUE files (default true)
        merge: bool,
        /// glob filter for file names
        name: Option<String>,
        /// output format (run 'cue filetypes' for more info)
        out: Option<String>,
        /// filename or - for stdout with optional file prefix (run 'cue filetypes' for more info)
        outfile: Option<String>,
        /// package name for non-CUE files
        package: Option<String>,
        /// CUE expression for single path component
        path: Option<Vec<String>>,
        /// paths in which to search for imports
        proto_path: Option<Vec<String>>,
        /// expression to select schema for evaluating values in non-CUE files
        schema: Option<String>,
        /// display field attributes
        show_attributes: bool,
        /// display hidden fields
        show_hidden: bool,
        /// display optional fields
        show_optional: bool,
        /// import as object with contextual data
        with_context: bool,
    }
}

flag_record! {
    /// Flags for `cue def`.
    pub struct DefFlags("def") {
        /// evaluate this expression only
        expression: Option<Vec<String>>,
        /// help for def
        help: bool,
        /// set the value of a tagged field
        inject: Option<Vec<String>>,
        /// concatenate multiple objects into a list
        list: bool,
        /// merge non-CUE files (default true)
        merge: bool,
        /// glob filter for file names
        name: Option<String>,
        /// output format (run 'cue filetypes' for more info)
        out: Option<String>,
        /// filename or - for stdout with optional file prefix (run 'cue filetypes' for more info)
        outfile: Option<String>,
        /// package name for non-CUE files
        package: Option<String>,
        /// CUE expression for single path component
        path: Option<Vec<String>>,
        /// paths in which to search for imports
        proto_path: Option<Vec<String>>,
        /// expression to select schema for evaluating values in non-CUE files
        schema: Option<String>,
        /// display field attributes
        show_attributes: bool,
        /// import as object with contextual data
        with_context: bool,
    }
}

flag_record! {
    /// Flags for `cue vet`.
    pub struct VetFlags("vet") {
        /// require the evaluation to be concrete
        concrete: bool,
        /// help for vet
        help: bool,
        /// set the value of a tagged field
        inject: Option<Vec<String>>,
        /// concatenate multiple objects into a list
        list: bool,
        /// merge non-CUE files (default true)
        merge: bool,
        /// glob filter for file names
        name: Option<String>,
        /// package name for non-CUE files
        package: Option<String>,
        /// CUE expression for single path component
        path: Option<Vec<String>>,
        /// paths in which to search for imports
        proto_path: Option<Vec<String>>,
        /// expression to select schema for evaluating values in non-CUE files
        schema: Option<String>,
        /// import as object with contextual data
        with_context: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::OptionKind;

    #[test]
    fn test_default_records_emit_nothing() {
        assert!(GlobalFlags::default().to_args().unwrap().is_empty());
        assert!(EvalFlags::default().to_args().unwrap().is_empty());
        assert!(DefFlags::default().to_args().unwrap().is_empty());
        assert!(VetFlags::default().to_args().unwrap().is_empty());
    }

    #[test]
    fn test_eval_flags_expression() {
        let flags = EvalFlags {
            expression: Some(vec!["a[0]".to_string(), "a[1]".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            flags.to_args().unwrap(),
            vec!["--expression=a[0]", "--expression=a[1]"]
        );
    }

    #[test]
    fn test_eval_flags_declaration_order() {
        let flags = EvalFlags {
            with_context: true,
            out: Some("yaml".to_string()),
            concrete: true,
            show_hidden: true,
            proto_path: Some(vec!["p1".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            flags.to_args().unwrap(),
            vec![
                "--concrete",
                "--out=yaml",
                "--proto-path=p1",
                "--show-hidden",
                "--with-context",
            ]
        );
    }

    #[test]
    fn test_global_flags() {
        let flags = GlobalFlags {
            all_errors: true,
            strict: true,
            ..Default::default()
        };
        assert_eq!(flags.to_args().unwrap(), vec!["--all-errors", "--strict"]);
    }

    #[test]
    fn test_vet_flags_merge_is_plain_switch() {
        let flags = VetFlags {
            merge: true,
            ..Default::default()
        };
        assert_eq!(flags.to_args().unwrap(), vec!["--merge"]);
    }

    #[test]
    fn test_schema_kinds_follow_field_types() {
        let expression = EvalFlags::SCHEMA
            .iter()
            .find(|spec| spec.name == "expression")
            .unwrap();
        assert_eq!(expression.kind, OptionKind::StrList);
        assert_eq!(expression.description(), "evaluate this expression only");

        let out = DefFlags::SCHEMA.iter().find(|spec| spec.name == "out").unwrap();
        assert_eq!(out.kind, OptionKind::Str);

        assert_eq!(EvalFlags::SCHEMA.len(), 18);
        assert_eq!(DefFlags::SCHEMA.len(), 14);
        assert_eq!(VetFlags::SCHEMA.len(), 11);
        assert_eq!(GlobalFlags::SCHEMA.len(), 6);
    }
}
