use alloc::borrow::Cow;

/// Options attached to one field declaration.
///
/// Exactly two options exist. `default` distinguishes "no default" (`None`)
/// from a default that happens to be an explicit null value
/// (`Some(Value::Null)` in the interpreter form).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOptions<D> {
    /// The default value, if one was given.
    pub default: Option<D>,
    /// Explicit `enforce` flag. `None` means the option was not written and
    /// the block-level setting applies.
    pub enforce: Option<bool>,
}

impl<D> Default for FieldOptions<D> {
    fn default() -> Self {
        Self {
            default: None,
            enforce: None,
        }
    }
}

impl<D> FieldOptions<D> {
    /// Resolves the enforce flag against the block-level setting.
    ///
    /// An explicit flag always wins. Otherwise a block-level `enforce` only
    /// applies to fields without a default.
    pub fn resolve_enforce(&self, block_enforce: bool) -> bool {
        match self.enforce {
            Some(explicit) => explicit,
            None => block_enforce && self.default.is_none(),
        }
    }
}

/// One `field(name, type, options)` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl<T, D> {
    /// Field name; validated when declared into a block.
    pub name: Cow<'static, str>,
    /// Opaque type annotation.
    pub ty: T,
    /// Declaration options.
    pub options: FieldOptions<D>,
}

impl<T, D> FieldDecl<T, D> {
    /// Declares a field with no options.
    pub fn new(name: impl Into<Cow<'static, str>>, ty: impl Into<T>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            options: FieldOptions::default(),
        }
    }

    /// Sets the `default` option.
    pub fn default(mut self, value: impl Into<D>) -> Self {
        self.options.default = Some(value.into());
        self
    }

    /// Sets the `enforce` option.
    pub fn enforce(mut self, enforce: bool) -> Self {
        self.options.enforce = Some(enforce);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Decl = FieldDecl<&'static str, i64>;

    #[test]
    fn no_options_by_default() {
        let decl = Decl::new("a_field", "u8");
        assert_eq!(decl.options.default, None);
        assert_eq!(decl.options.enforce, None);
        assert!(!decl.options.resolve_enforce(false));
    }

    #[test]
    fn block_enforce_skips_defaulted_fields() {
        let plain = Decl::new("a", "u8");
        let defaulted = Decl::new("b", "u8").default(7);
        let opted_out = Decl::new("c", "u8").enforce(false);

        assert!(plain.options.resolve_enforce(true));
        assert!(!defaulted.options.resolve_enforce(true));
        assert!(!opted_out.options.resolve_enforce(true));
    }

    #[test]
    fn explicit_enforce_wins_over_default() {
        let decl = Decl::new("a", "u8").default(1).enforce(true);
        assert!(decl.options.resolve_enforce(false));
    }
}
