use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use indexmap::IndexSet;

use crate::projection::{self, TypeDescriptor};
use crate::{Field, FieldType};

/// The composed output of one finalized declaration block.
///
/// Every accessor is a deterministic projection of the frozen field list:
/// calling one twice yields equal results, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema<T, D> {
    name: Cow<'static, str>,
    fields: Vec<Field<T, D>>,
    required: IndexSet<Cow<'static, str>>,
}

impl<T, D> Schema<T, D> {
    pub(crate) fn from_parts(
        name: Cow<'static, str>,
        fields: Vec<Field<T, D>>,
        required: IndexSet<Cow<'static, str>>,
    ) -> Self {
        Self {
            name,
            fields,
            required,
        }
    }

    /// The struct name the block declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The structure shape: every field with its default, in declaration order.
    pub fn fields(&self) -> &[Field<T, D>] {
        &self.fields
    }

    /// Looks up one field by name.
    pub fn field(&self, name: &str) -> Option<&Field<T, D>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the block declared no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names, in declaration order.
    pub fn keys(&self) -> Vec<&str> {
        projection::keys(&self.fields)
    }

    /// Name → default pairs, in declaration order. `None` marks "no default".
    pub fn defaults(&self) -> Vec<(&str, Option<&D>)> {
        projection::defaults(&self.fields)
    }

    /// The type descriptor: name → effective type, in declaration order.
    pub fn types(&self) -> Vec<(&str, &FieldType<T>)> {
        projection::types(&self.fields)
    }

    /// The required-field set: exactly the enforced names.
    pub fn required(&self) -> &IndexSet<Cow<'static, str>> {
        &self.required
    }

    /// Required names as plain strings, in declaration order.
    pub fn required_names(&self) -> Vec<&str> {
        self.required.iter().map(|name| &**name).collect()
    }

    /// Whether `name` must be supplied at construction.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// Renders the type descriptor as a struct outline.
    pub fn descriptor(&self) -> TypeDescriptor<'_, T, D> {
        TypeDescriptor::new(&self.name, &self.fields)
    }
}

impl<T: fmt::Display, D> fmt::Display for Schema<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor(), f)
    }
}
