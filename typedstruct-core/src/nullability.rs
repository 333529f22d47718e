use core::fmt;

/// The effective type of an accumulated field: either exactly the declared
/// type, or the declared type widened to admit an absent value.
///
/// `T` is whatever token the front end uses for type annotations. It is
/// carried through untouched; the engine never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType<T> {
    /// The declared type, used as-is.
    Declared(T),
    /// The declared type or absent (`Option<T>`).
    Nullable(T),
}

impl<T> FieldType<T> {
    /// The type annotation as it was declared, before any widening.
    pub const fn declared(&self) -> &T {
        match self {
            FieldType::Declared(ty) | FieldType::Nullable(ty) => ty,
        }
    }

    /// Consumes the field type, returning the declared annotation.
    pub fn into_declared(self) -> T {
        match self {
            FieldType::Declared(ty) | FieldType::Nullable(ty) => ty,
        }
    }

    /// Whether the type was widened to admit an absent value.
    pub const fn is_nullable(&self) -> bool {
        matches!(self, FieldType::Nullable(_))
    }

    /// Borrowing view of the same field type.
    pub const fn as_ref(&self) -> FieldType<&T> {
        match self {
            FieldType::Declared(ty) => FieldType::Declared(ty),
            FieldType::Nullable(ty) => FieldType::Nullable(ty),
        }
    }

    /// Maps the annotation token while keeping the nullability.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldType<U> {
        match self {
            FieldType::Declared(ty) => FieldType::Declared(f(ty)),
            FieldType::Nullable(ty) => FieldType::Nullable(f(ty)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for FieldType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Declared(ty) => write!(f, "{ty}"),
            FieldType::Nullable(ty) => write!(f, "Option<{ty}>"),
        }
    }
}

/// Decides the effective type of a field.
///
/// | default | enforce | effective type |
/// |---------|---------|----------------|
/// | yes     | any     | declared       |
/// | no      | true    | declared       |
/// | no      | false   | `Option<declared>` |
pub fn resolve_nullability<T>(declared: T, has_default: bool, enforce: bool) -> FieldType<T> {
    if has_default || enforce {
        FieldType::Declared(declared)
    } else {
        FieldType::Nullable(declared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_table() {
        assert_eq!(resolve_nullability("u8", true, true), FieldType::Declared("u8"));
        assert_eq!(resolve_nullability("u8", true, false), FieldType::Declared("u8"));
        assert_eq!(resolve_nullability("u8", false, true), FieldType::Declared("u8"));
        assert_eq!(resolve_nullability("u8", false, false), FieldType::Nullable("u8"));
    }

    #[test]
    fn display_widens_with_option() {
        assert_eq!(FieldType::Declared("String").to_string(), "String");
        assert_eq!(FieldType::Nullable("String").to_string(), "Option<String>");
        assert_eq!(
            FieldType::Nullable("Vec<(u8, u16)>").to_string(),
            "Option<Vec<(u8, u16)>>"
        );
    }

    #[test]
    fn map_keeps_nullability() {
        let widened = FieldType::Nullable("u32").map(str::len);
        assert_eq!(widened, FieldType::Nullable(3));
        assert_eq!(*widened.declared(), 3);
        assert!(widened.is_nullable());
    }
}
