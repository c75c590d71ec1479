//! Schema-bound option values.

use super::{OptionKind, OptionSpec, OptionValue, encode_options};
use crate::command::Subcommand;
use crate::error::{CoreError, CoreResult};
use crate::flags::GlobalFlags;

/// An ordered set of option values bound to one schema.
///
/// Values are kept parallel to the schema, so rendering always follows
/// declaration order no matter in which order options were set. Setting an
/// option by name validates both the name and the value kind immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    label: &'static str,
    schema: &'static [OptionSpec],
    values: Vec<OptionValue>,
}

impl OptionSet {
    /// Creates a set with every option absent.
    pub fn new(label: &'static str, schema: &'static [OptionSpec]) -> Self {
        Self {
            label,
            schema,
            values: vec![OptionValue::Absent; schema.len()],
        }
    }

    /// Creates a set from values parallel to `schema`.
    ///
    /// Missing trailing values count as absent; more values than options is a
    /// `ValueCountMismatch`. Kinds are not checked here; [`OptionSet::to_args`]
    /// rejects mismatches.
    pub fn from_values(
        label: &'static str,
        schema: &'static [OptionSpec],
        mut values: Vec<OptionValue>,
    ) -> CoreResult<Self> {
        if values.len() > schema.len() {
            return Err(CoreError::ValueCountMismatch {
                schema: label.to_string(),
                expected: schema.len(),
                found: values.len(),
            });
        }
        values.resize(schema.len(), OptionValue::Absent);
        Ok(Self::from_record(label, schema, values))
    }

    /// Set built from a generated flag record, one value per option.
    pub(crate) fn from_record(
        label: &'static str,
        schema: &'static [OptionSpec],
        values: Vec<OptionValue>,
    ) -> Self {
        debug_assert_eq!(values.len(), schema.len());
        Self {
            label,
            schema,
            values,
        }
    }

    /// Whether this set is bound to `schema`.
    pub fn is_for(&self, schema: &[OptionSpec]) -> bool {
        self.schema == schema
    }

    /// Empty set for a subcommand's own flags.
    pub fn for_subcommand(subcommand: Subcommand) -> Self {
        Self::new(subcommand.as_str(), subcommand.schema())
    }

    /// Empty set for the global flags.
    pub fn global() -> Self {
        Self::new(GlobalFlags::LABEL, GlobalFlags::SCHEMA)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn schema(&self) -> &'static [OptionSpec] {
        self.schema
    }

    /// Looks up an option by identifier or flag.
    pub fn spec(&self, name: &str) -> Option<&'static OptionSpec> {
        self.schema.iter().find(|spec| spec.matches(name))
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        let index = self.index_of(name)?;
        self.values.get(index)
    }

    /// True when no option would emit a token.
    pub fn is_empty(&self) -> bool {
        self.values
            .iter()
            .all(|value| matches!(value, OptionValue::Absent | OptionValue::Bool(false)))
    }

    /// Sets an option, replacing any previous value.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> CoreResult<&mut Self> {
        let index = self.require(name)?;
        let value = value.into();
        let spec = self.schema[index];
        if !spec.kind.accepts(&value) {
            return Err(CoreError::InvalidOptionValue {
                flag: spec.flag(),
                kind: spec.kind.to_string(),
                value: value.to_string(),
            });
        }
        self.values[index] = value;
        Ok(self)
    }

    /// Builder form of [`OptionSet::set`].
    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> CoreResult<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Applies a textual `name[=value]` setting, as typed on a command line.
    ///
    /// A switch without a value turns it on; `true`/`false` (or `1`/`0`) set it
    /// explicitly. A repeated-string option accumulates one element per call.
    /// A string option requires a value.
    pub fn apply(&mut self, name: &str, raw: Option<&str>) -> CoreResult<&mut Self> {
        let index = self.require(name)?;
        let spec = self.schema[index];

        let value = match (spec.kind, raw) {
            (OptionKind::Bool, None) => OptionValue::Bool(true),
            (OptionKind::Bool, Some("true" | "1")) => OptionValue::Bool(true),
            (OptionKind::Bool, Some("false" | "0")) => OptionValue::Bool(false),
            (OptionKind::Str, Some(v)) => OptionValue::Str(v.to_string()),
            (OptionKind::StrList, Some(v)) => {
                let mut items = match std::mem::take(&mut self.values[index]) {
                    OptionValue::Str(s) => vec![s],
                    OptionValue::List(items) => items,
                    _ => Vec::new(),
                };
                items.push(v.to_string());
                OptionValue::List(items)
            }
            (kind, raw) => {
                return Err(CoreError::InvalidOptionValue {
                    flag: spec.flag(),
                    kind: kind.to_string(),
                    value: raw.map_or_else(|| "None".to_string(), |v| format!("{v:?}")),
                });
            }
        };

        self.values[index] = value;
        Ok(self)
    }

    /// Renders the set into tokens in declaration order.
    pub fn to_args(&self) -> CoreResult<Vec<String>> {
        encode_options(self.schema, &self.values)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.schema.iter().position(|spec| spec.matches(name))
    }

    fn require(&self, name: &str) -> CoreResult<usize> {
        self.index_of(name).ok_or_else(|| CoreError::UnknownOption {
            schema: self.label.to_string(),
            name: name.to_string(),
        })
    }
}
