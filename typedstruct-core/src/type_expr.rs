use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// A type annotation for the interpreter form.
///
/// Stored and re-emitted verbatim. Nothing in this crate parses or checks it:
/// `TypeExpr::new("Vec<String>")` and `TypeExpr::new("not a type")` are
/// treated alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeExpr(Cow<'static, str>);

impl TypeExpr {
    /// Wraps a static annotation without allocating.
    pub const fn from_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// Wraps any annotation.
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    /// The annotation text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeExpr {
    fn from(text: &'static str) -> Self {
        Self::from_static(text)
    }
}

impl From<String> for TypeExpr {
    fn from(text: String) -> Self {
        Self(Cow::Owned(text))
    }
}

impl PartialEq<str> for TypeExpr {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TypeExpr {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
