use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::projection::{self, TypeDescriptor};
use crate::{ConstructError, FieldType, StaticField};

/// Reflection over a struct generated by `typed_struct!`.
///
/// The macro fills in [`NAME`](Self::NAME) and [`FIELDS`](Self::FIELDS);
/// every accessor is derived from those and returns the same snapshot on
/// every call.
pub trait TypedStruct: Sized {
    /// The generated builder.
    type Builder: Default;

    /// The struct name.
    const NAME: &'static str;

    /// One descriptor per field, in declaration order. Types and defaults are
    /// source text, as written in the declaration.
    const FIELDS: &'static [StaticField];

    /// Starts a builder with nothing supplied.
    fn builder() -> Self::Builder {
        Self::Builder::default()
    }

    /// Field names, in declaration order.
    fn keys() -> Vec<&'static str> {
        projection::keys(Self::FIELDS)
    }

    /// Name → default source text, in declaration order. `None` marks
    /// "no default".
    fn defaults() -> Vec<(&'static str, Option<&'static str>)> {
        Self::FIELDS
            .iter()
            .map(|f| (f.name(), f.default))
            .collect()
    }

    /// Name → effective type, in declaration order.
    fn types() -> Vec<(&'static str, FieldType<&'static str>)> {
        Self::FIELDS.iter().map(|f| (f.name(), f.ty)).collect()
    }

    /// Name → rendered effective type (`"Option<String>"`), in declaration order.
    fn type_names() -> Vec<(&'static str, String)> {
        Self::FIELDS
            .iter()
            .map(|f| (f.name(), f.ty.to_string()))
            .collect()
    }

    /// Names that must be supplied to the builder.
    fn required() -> Vec<&'static str> {
        projection::required(Self::FIELDS)
    }

    /// The type descriptor rendered as a struct outline.
    fn descriptor() -> TypeDescriptor<'static, &'static str, &'static str> {
        TypeDescriptor::new(Self::NAME, Self::FIELDS)
    }
}

/// Builder side of a generated struct.
pub trait TypedBuilder: Default {
    /// The struct being built.
    type Output: TypedStruct;

    /// Fills omitted fields and checks the required set.
    fn build(self) -> Result<Self::Output, ConstructError>;
}
