//! Flag encoding for `cue` subcommands.
//!
//! Options are declared as typed records (see [`schema`]) whose fields map one
//! to one onto command-line flags. Each record converts into an [`OptionSet`],
//! and [`OptionSet::to_args`] renders the set into tokens:
//!
//! | value                  | tokens                        |
//! |------------------------|-------------------------------|
//! | `Bool(true)`           | `--flag`                      |
//! | `Bool(false)`          | nothing                       |
//! | `Str("v")`             | `--flag=v`                    |
//! | `List(["a", "b"])`     | `--flag=a`, `--flag=b`        |
//! | `Absent`               | nothing                       |

#[macro_use]
mod macros;
pub mod schema;
mod set;

pub use schema::{DefFlags, EvalFlags, GlobalFlags, VetFlags};
pub use set::OptionSet;

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Declared shape of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A switch, emitted bare when set.
    Bool,
    /// A single optional string.
    Str,
    /// A string that may be repeated.
    StrList,
}

impl OptionKind {
    /// Whether `value` is an acceptable value for an option of this kind.
    ///
    /// `Absent` is acceptable for every kind. A repeated-string option also
    /// accepts a single string.
    pub fn accepts(self, value: &OptionValue) -> bool {
        matches!(
            (self, value),
            (_, OptionValue::Absent)
                | (OptionKind::Bool, OptionValue::Bool(_))
                | (OptionKind::Str, OptionValue::Str(_))
                | (OptionKind::StrList, OptionValue::Str(_))
                | (OptionKind::StrList, OptionValue::List(_))
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Bool => "bool",
            OptionKind::Str => "string",
            OptionKind::StrList => "string-list",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(OptionKind::Bool),
            "string" | "str" => Ok(OptionKind::Str),
            "string-list" | "list" => Ok(OptionKind::StrList),
            other => Err(CoreError::UnsupportedOptionKind(other.to_string())),
        }
    }
}

/// Value of a single option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionValue {
    #[default]
    Absent,
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Absent => f.write_str("None"),
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Str(s) => write!(f, "{s:?}"),
            OptionValue::List(items) => write!(f, "{items:?}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(items: Vec<String>) -> Self {
        OptionValue::List(items)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(items: Vec<&str>) -> Self {
        OptionValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Rust types usable as fields of a flag record.
///
/// Only the three supported shapes implement this trait, so a record field of
/// any other type is rejected at compile time.
pub trait FlagValue {
    const KIND: OptionKind;

    fn into_option_value(self) -> OptionValue;
}

impl FlagValue for bool {
    const KIND: OptionKind = OptionKind::Bool;

    fn into_option_value(self) -> OptionValue {
        OptionValue::Bool(self)
    }
}

impl FlagValue for Option<String> {
    const KIND: OptionKind = OptionKind::Str;

    fn into_option_value(self) -> OptionValue {
        self.map_or(OptionValue::Absent, OptionValue::Str)
    }
}

impl FlagValue for Option<Vec<String>> {
    const KIND: OptionKind = OptionKind::StrList;

    fn into_option_value(self) -> OptionValue {
        self.map_or(OptionValue::Absent, OptionValue::List)
    }
}

/// Declaration of one option in a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    description: &'static str,
}

impl OptionSpec {
    pub const fn new(name: &'static str, kind: OptionKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
        }
    }

    /// The command-line flag for this option.
    pub fn flag(&self) -> String {
        flag_name(self.name)
    }

    /// One-line description of the option.
    pub fn description(&self) -> &'static str {
        self.description.trim()
    }

    /// Whether `name` refers to this option, either by identifier or by flag.
    ///
    /// Names are compared in their derived flag form, so `list_`, `list`,
    /// `show_hidden` and `--show-hidden` all resolve.
    pub fn matches(&self, name: &str) -> bool {
        flag_name(name.trim_start_matches('-')) == self.flag()
    }
}

/// Derives the flag for an option identifier.
///
/// Trailing underscores are stripped (they only disambiguate identifiers from
/// keywords) and the remaining underscores become hyphens:
/// `show_hidden` → `--show-hidden`, `list_` → `--list`.
pub fn flag_name(name: &str) -> String {
    format!("--{}", name.trim_end_matches('_').replace('_', "-"))
}

/// Renders one option value into tokens.
pub fn encode_value(flag: &str, kind: OptionKind, value: &OptionValue) -> CoreResult<Vec<String>> {
    if !kind.accepts(value) {
        return Err(CoreError::InvalidOptionValue {
            flag: flag.to_string(),
            kind: kind.to_string(),
            value: value.to_string(),
        });
    }

    let tokens = match value {
        OptionValue::Absent | OptionValue::Bool(false) => Vec::new(),
        OptionValue::Bool(true) => vec![flag.to_string()],
        OptionValue::Str(s) => vec![format!("{flag}={s}")],
        OptionValue::List(items) => items.iter().map(|item| format!("{flag}={item}")).collect(),
    };
    Ok(tokens)
}

/// Renders every option of a schema in declaration order.
///
/// `values` is parallel to `schema`; missing trailing values count as absent.
pub fn encode_options(schema: &[OptionSpec], values: &[OptionValue]) -> CoreResult<Vec<String>> {
    let mut args = Vec::new();
    for (spec, value) in schema.iter().zip(values) {
        args.extend(encode_value(&spec.flag(), spec.kind, value)?);
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_name_derivation() {
        assert_eq!(flag_name("expression"), "--expression");
        assert_eq!(flag_name("show_hidden"), "--show-hidden");
        assert_eq!(flag_name("list_"), "--list");
        assert_eq!(flag_name("proto_path"), "--proto-path");
        assert_eq!(flag_name("type__"), "--type");
    }

    #[test]
    fn test_encode_bool() {
        let on = encode_value("--concrete", OptionKind::Bool, &true.into()).unwrap();
        assert_eq!(on, vec!["--concrete"]);

        let off = encode_value("--concrete", OptionKind::Bool, &false.into()).unwrap();
        assert!(off.is_empty());
    }

    #[test]
    fn test_encode_string() {
        let absent = encode_value("--out", OptionKind::Str, &OptionValue::Absent).unwrap();
        assert!(absent.is_empty());

        let set = encode_value("--out", OptionKind::Str, &"json".into()).unwrap();
        assert_eq!(set, vec!["--out=json"]);
    }

    #[test]
    fn test_encode_list_preserves_order() {
        let value = OptionValue::from(vec!["a[1]", "a[0]", "b"]);
        let args = encode_value("--expression", OptionKind::StrList, &value).unwrap();
        assert_eq!(
            args,
            vec!["--expression=a[1]", "--expression=a[0]", "--expression=b"]
        );
    }

    #[test]
    fn test_encode_list_accepts_single_string() {
        let args = encode_value("--expression", OptionKind::StrList, &"a[0]".into()).unwrap();
        assert_eq!(args, vec!["--expression=a[0]"]);
    }

    #[test]
    fn test_encode_empty_list() {
        let args = encode_value("--inject", OptionKind::StrList, &OptionValue::List(vec![]))
            .unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn test_encode_kind_mismatch() {
        let err = encode_value("--concrete", OptionKind::Bool, &"yes".into()).unwrap_err();
        match err {
            CoreError::InvalidOptionValue { flag, kind, value } => {
                assert_eq!(flag, "--concrete");
                assert_eq!(kind, "bool");
                assert_eq!(value, "\"yes\"");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(encode_value("--out", OptionKind::Str, &true.into()).is_err());
        assert!(encode_value("--out", OptionKind::Str, &vec!["a"].into()).is_err());
    }

    #[test]
    fn test_encode_options_declaration_order() {
        const SCHEMA: &[OptionSpec] = &[
            OptionSpec::new("all", OptionKind::Bool, "show all"),
            OptionSpec::new("expression", OptionKind::StrList, "expr"),
            OptionSpec::new("out", OptionKind::Str, "format"),
        ];
        let values = vec![true.into(), vec!["x", "y"].into(), "yaml".into()];
        let args = encode_options(SCHEMA, &values).unwrap();
        assert_eq!(
            args,
            vec!["--all", "--expression=x", "--expression=y", "--out=yaml"]
        );
    }

    #[test]
    fn test_option_kind_from_str() {
        assert_eq!("bool".parse::<OptionKind>().unwrap(), OptionKind::Bool);
        assert_eq!("string".parse::<OptionKind>().unwrap(), OptionKind::Str);
        assert_eq!("string-list".parse::<OptionKind>().unwrap(), OptionKind::StrList);
        assert!(matches!(
            "int|None".parse::<OptionKind>(),
            Err(CoreError::UnsupportedOptionKind(_))
        ));
    }

    #[test]
    fn test_option_spec_matches() {
        let spec = OptionSpec::new("show_hidden", OptionKind::Bool, " display hidden fields");
        assert!(spec.matches("show_hidden"));
        assert!(spec.matches("show-hidden"));
        assert!(spec.matches("--show-hidden"));
        assert!(!spec.matches("hidden"));

        let keyword = OptionSpec::new("type_", OptionKind::Str, "kind");
        assert!(keyword.matches("type_"));
        assert!(keyword.matches("type"));
        assert!(keyword.matches("--type"));
        assert!(!keyword.matches("types"));
        assert_eq!(spec.description(), "display hidden fields");
    }
}
