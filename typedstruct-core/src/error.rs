use alloc::borrow::Cow;
use alloc::string::String;

/// Errors raised while a declaration block is being composed.
///
/// All of them are fatal for the block: nothing is emitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The field name is not a valid identifier.
    InvalidFieldName {
        /// The rejected name.
        name: String,
    },

    /// The field name was already declared in the same block.
    DuplicateField {
        /// The repeated name.
        name: String,
    },

    /// An option key that the declaration form does not recognize.
    UnknownOption {
        /// The unrecognized key.
        key: String,
        /// Closest known key, if any is close enough.
        suggestion: Option<&'static str>,
        /// Every key accepted at that position.
        expected: &'static [&'static str],
    },

    /// The same option key was given twice for one field.
    DuplicateOption {
        /// The repeated key.
        key: String,
    },

    /// An option was given a value it can't take (e.g. `enforce = 3`).
    InvalidOptionValue {
        /// The option key.
        key: String,
        /// What the option expects.
        expected: &'static str,
    },
}

impl SchemaError {
    /// Stable machine-readable code for this error kind.
    pub const fn code(&self) -> &'static str {
        match self {
            SchemaError::InvalidFieldName { .. } => "schema::invalid_field_name",
            SchemaError::DuplicateField { .. } => "schema::duplicate_field",
            SchemaError::UnknownOption { .. } => "schema::unknown_option",
            SchemaError::DuplicateOption { .. } => "schema::duplicate_option",
            SchemaError::InvalidOptionValue { .. } => "schema::invalid_option_value",
        }
    }
}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SchemaError::InvalidFieldName { name } => {
                write!(f, "invalid field name `{name}`: expected an identifier")
            }
            SchemaError::DuplicateField { name } => {
                write!(f, "duplicate field `{name}`: already declared in this block")
            }
            SchemaError::UnknownOption {
                key,
                suggestion,
                expected,
            } => {
                write!(f, "unknown option `{key}`")?;
                if let Some(known) = suggestion {
                    return write!(f, ", did you mean `{known}`?");
                }
                write!(f, ", expected one of:")?;
                for (i, known) in expected.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{sep}`{known}`")?;
                }
                Ok(())
            }
            SchemaError::DuplicateOption { key } => {
                write!(f, "option `{key}` given more than once")
            }
            SchemaError::InvalidOptionValue { key, expected } => {
                write!(f, "option `{key}` expects {expected}")
            }
        }
    }
}

impl core::error::Error for SchemaError {}

/// Errors raised when building an instance from a finalized schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// An enforced field was not supplied.
    MissingRequiredField {
        /// The schema (struct) name.
        schema: Cow<'static, str>,
        /// The omitted field.
        field: Cow<'static, str>,
    },

    /// An override named a field the schema doesn't declare.
    UnknownField {
        /// The schema (struct) name.
        schema: Cow<'static, str>,
        /// The unknown name.
        field: String,
        /// Closest declared field, if any is close enough.
        suggestion: Option<String>,
    },

    /// An override named the same field more than once.
    DuplicateOverride {
        /// The schema (struct) name.
        schema: Cow<'static, str>,
        /// The repeated name.
        field: String,
    },
}

impl ConstructError {
    /// Shorthand used by generated builders.
    pub const fn missing_required(schema: &'static str, field: &'static str) -> Self {
        ConstructError::MissingRequiredField {
            schema: Cow::Borrowed(schema),
            field: Cow::Borrowed(field),
        }
    }

    /// Stable machine-readable code for this error kind.
    pub const fn code(&self) -> &'static str {
        match self {
            ConstructError::MissingRequiredField { .. } => "construct::missing_required_field",
            ConstructError::UnknownField { .. } => "construct::unknown_field",
            ConstructError::DuplicateOverride { .. } => "construct::duplicate_override",
        }
    }
}

impl core::fmt::Display for ConstructError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConstructError::MissingRequiredField { schema, field } => {
                write!(f, "missing required field `{field}` for `{schema}`")
            }
            ConstructError::UnknownField {
                schema,
                field,
                suggestion,
            } => {
                write!(f, "`{schema}` has no field `{field}`")?;
                if let Some(known) = suggestion {
                    write!(f, ", did you mean `{known}`?")?;
                }
                Ok(())
            }
            ConstructError::DuplicateOverride { schema, field } => {
                write!(f, "field `{field}` given more than once for `{schema}`")
            }
        }
    }
}

impl core::error::Error for ConstructError {}

/// Finds the closest candidate within a small edit distance.
pub(crate) fn find_closest<'a>(
    target: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    candidates
        .into_iter()
        .filter_map(|c| {
            let dist = strsim::levenshtein(target, c);
            if dist <= 3 { Some((c, dist)) } else { None }
        })
        .min_by_key(|(_, d)| *d)
        .map(|(s, _)| s)
}

/// Option keys accepted by `field(name, type, ...)`.
pub const FIELD_OPTION_KEYS: &[&str] = &["default", "enforce"];

/// Builds the error for an unrecognized option key, with a suggestion when
/// the key looks like a typo of one of `expected`.
pub fn unknown_option(key: &str, expected: &'static [&'static str]) -> SchemaError {
    SchemaError::UnknownOption {
        key: key.into(),
        suggestion: find_closest(key, expected.iter().copied()),
        expected,
    }
}
