use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use indexmap::IndexMap;

use crate::error::find_closest;
use crate::{ConstructError, Schema, Value, trace};

/// An instance built from a [`Schema`] by the interpreter form.
///
/// Holds exactly one value per declared field, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Cow<'static, str>,
    values: IndexMap<Cow<'static, str>, Value>,
}

impl Record {
    /// The name of the schema this record was built from.
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// The value of one field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Field name → value pairs, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (&**k, v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Converts into a plain `Value::Map`.
    pub fn into_value(self) -> Value {
        Value::Map(
            self.values
                .into_iter()
                .map(|(k, v)| (k.into_owned(), v))
                .collect(),
        )
    }
}

impl<T> Schema<T, Value> {
    /// Builds an instance from named overrides.
    ///
    /// Every field not overridden takes its default, or `Value::Null` when it
    /// has none and is nullable. An omitted enforced field is an error even
    /// when it also has a default. Overridden values are stored as given, and
    /// naming a field twice is an error.
    pub fn instantiate<K, V>(
        &self,
        overrides: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Record, ConstructError>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut supplied: IndexMap<String, Value> = IndexMap::new();
        for (key, value) in overrides {
            let key = key.into();
            if self.field(&key).is_none() {
                let suggestion = find_closest(&key, self.fields().iter().map(|f| f.name()))
                    .map(ToString::to_string);
                return Err(ConstructError::UnknownField {
                    schema: Cow::Owned(self.name().to_string()),
                    field: key,
                    suggestion,
                });
            }
            if supplied.contains_key(&key) {
                return Err(ConstructError::DuplicateOverride {
                    schema: Cow::Owned(self.name().to_string()),
                    field: key,
                });
            }
            supplied.insert(key, value.into());
        }

        let mut values = IndexMap::with_capacity(self.len());
        for field in self.fields() {
            let value = match supplied.swap_remove(field.name()) {
                Some(value) => value,
                None if field.enforced => {
                    return Err(ConstructError::MissingRequiredField {
                        schema: Cow::Owned(self.name().to_string()),
                        field: field.name.clone(),
                    });
                }
                None => field.default.clone().unwrap_or(Value::Null),
            };
            values.insert(field.name.clone(), value);
        }

        trace!(schema = %self.name(), fields = values.len(), "record built");
        Ok(Record {
            schema: Cow::Owned(self.name().to_string()),
            values,
        })
    }

    /// Builds an instance with no overrides at all.
    pub fn instantiate_default(&self) -> Result<Record, ConstructError> {
        self.instantiate(core::iter::empty::<(String, Value)>())
    }
}
