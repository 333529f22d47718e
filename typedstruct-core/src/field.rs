use alloc::borrow::Cow;

use crate::FieldType;

/// A validated field, as the accumulator stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T, D> {
    /// Field name, unique within its schema.
    pub name: Cow<'static, str>,
    /// The default value; `None` is the "no default" sentinel.
    pub default: Option<D>,
    /// Declared type, possibly widened to admit an absent value.
    pub ty: FieldType<T>,
    /// Whether construction requires this field.
    pub enforced: bool,
}

impl<T, D> Field<T, D> {
    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the effective type admits an absent value.
    pub const fn is_nullable(&self) -> bool {
        self.ty.is_nullable()
    }
}

/// Field descriptor emitted by `typed_struct!`: the type is the declared
/// type's source text, the default is the default expression's source text.
pub type StaticField = Field<&'static str, &'static str>;
