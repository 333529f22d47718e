//! Read-only projections of an accumulated field list.
//!
//! Both emitted forms go through these: [`Schema`](crate::Schema) over its
//! owned fields, and [`TypedStruct`](crate::TypedStruct) over the static
//! descriptors generated by `typed_struct!`. Every projection keeps
//! declaration order and is a pure function of the field slice.

use alloc::vec::Vec;
use core::fmt;

use crate::{Field, FieldType};

/// Field names, in declaration order.
pub fn keys<T, D>(fields: &[Field<T, D>]) -> Vec<&str> {
    fields.iter().map(Field::name).collect()
}

/// Name → default pairs, in declaration order. `None` marks "no default".
pub fn defaults<T, D>(fields: &[Field<T, D>]) -> Vec<(&str, Option<&D>)> {
    fields
        .iter()
        .map(|f| (f.name(), f.default.as_ref()))
        .collect()
}

/// Name → effective type pairs, in declaration order.
pub fn types<T, D>(fields: &[Field<T, D>]) -> Vec<(&str, &FieldType<T>)> {
    fields.iter().map(|f| (f.name(), &f.ty)).collect()
}

/// Names of enforced fields, in declaration order.
pub fn required<T, D>(fields: &[Field<T, D>]) -> Vec<&str> {
    fields
        .iter()
        .filter(|f| f.enforced)
        .map(Field::name)
        .collect()
}

/// Renders a type descriptor as a Rust-like struct outline:
///
/// ```text
/// struct User {
///     id: u64,
///     email: Option<String>,
/// }
/// ```
pub struct TypeDescriptor<'a, T, D> {
    name: &'a str,
    fields: &'a [Field<T, D>],
}

impl<'a, T, D> TypeDescriptor<'a, T, D> {
    /// Describes `fields` under the struct name `name`.
    pub fn new(name: &'a str, fields: &'a [Field<T, D>]) -> Self {
        Self { name, fields }
    }
}

impl<T: fmt::Display, D> fmt::Display for TypeDescriptor<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return write!(f, "struct {} {{}}", self.name);
        }
        writeln!(f, "struct {} {{", self.name)?;
        for field in self.fields {
            writeln!(f, "    {}: {},", field.name, field.ty)?;
        }
        write!(f, "}}")
    }
}
