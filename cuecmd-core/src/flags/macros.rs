// Declarative generation of flag records.
//
// Each field needs exactly one doc line; it becomes the option's description
// in the generated schema. Field types must implement `FlagValue`.

macro_rules! flag_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($label:literal) {
            $(
                #[doc = $doc:literal]
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        $vis struct $name {
            $(
                #[doc = $doc]
                pub $field: $ty,
            )*
        }

        impl $name {
            /// Name used for this record's schema in diagnostics.
            pub const LABEL: &'static str = $label;

            /// Options of this record, in flag emission order.
            pub const SCHEMA: &'static [$crate::flags::OptionSpec] = &[
                $(
                    $crate::flags::OptionSpec::new(
                        stringify!($field),
                        <$ty as $crate::flags::FlagValue>::KIND,
                        $doc,
                    ),
                )*
            ];

            /// Renders the record into command-line tokens.
            pub fn to_args(&self) -> $crate::error::CoreResult<Vec<String>> {
                $crate::flags::OptionSet::from(self.clone()).to_args()
            }
        }

        impl From<$name> for $crate::flags::OptionSet {
            fn from(record: $name) -> Self {
                $crate::flags::OptionSet::from_record(
                    $label,
                    $name::SCHEMA,
                    vec![
                        $( $crate::flags::FlagValue::into_option_value(record.$field), )*
                    ],
                )
            }
        }
    };
}
