use alloc::borrow::Cow;
use alloc::vec::Vec;

use indexmap::IndexSet;

use crate::{
    Field, FieldDecl, FieldType, Schema, SchemaError, debug, resolve_nullability, trace,
    validate_declaration,
};

/// Accumulated state for one declaration block.
///
/// A builder is created when a block starts, receives the block's
/// declarations strictly in order through [`declare`](Self::declare), and is
/// consumed by [`finish`](Self::finish) when the block ends. Fields can only be
/// appended: there is no way to update or remove one. Nothing can be queried
/// from the schema until `finish` has run, and nothing can be declared after.
///
/// The first rejected declaration aborts the block. The builder stays
/// unmutated by it, refuses every later declaration, and `finish` reports the
/// original error instead of emitting a partial schema.
#[derive(Debug, Clone)]
pub struct SchemaBuilder<T, D> {
    name: Cow<'static, str>,
    enforce_all: bool,
    fields: Vec<Field<T, D>>,
    required: IndexSet<Cow<'static, str>>,
    aborted: Option<SchemaError>,
}

impl<T, D> SchemaBuilder<T, D> {
    /// Starts a block for the struct called `name`.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            enforce_all: false,
            fields: Vec::new(),
            required: IndexSet::new(),
            aborted: None,
        }
    }

    /// Block-level `enforce`: fields declared afterwards that have neither a
    /// default nor an explicit `enforce` option become enforced.
    pub fn enforce_all(mut self, enforce: bool) -> Self {
        self.enforce_all = enforce;
        self
    }

    /// The name of the struct being declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of fields accepted so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether a declaration in this block has already been rejected.
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Validates one declaration, resolves its effective type, and appends it.
    pub fn declare(&mut self, decl: FieldDecl<T, D>) -> Result<&mut Self, SchemaError> {
        if let Some(err) = &self.aborted {
            return Err(err.clone());
        }

        if let Err(err) = validate_declaration(&decl.name, self.fields.iter().map(Field::name)) {
            debug!(schema = %self.name, field = %decl.name, error = %err, "aborting block");
            self.aborted = Some(err.clone());
            return Err(err);
        }

        let FieldDecl { name, ty, options } = decl;
        let enforced = options.resolve_enforce(self.enforce_all);
        let ty = resolve_nullability(ty, options.default.is_some(), enforced);
        self.append(name, options.default, ty, enforced);
        Ok(self)
    }

    /// Declares every field of `decls` in order, then finishes the block.
    ///
    /// Stops at the first rejected declaration.
    pub fn compose(
        mut self,
        decls: impl IntoIterator<Item = FieldDecl<T, D>>,
    ) -> Result<Schema<T, D>, SchemaError> {
        for decl in decls {
            self.declare(decl)?;
        }
        self.finish()
    }

    /// Ends the block and freezes the accumulated fields into a [`Schema`].
    pub fn finish(self) -> Result<Schema<T, D>, SchemaError> {
        if let Some(err) = self.aborted {
            return Err(err);
        }
        debug!(
            schema = %self.name,
            fields = self.fields.len(),
            required = self.required.len(),
            "schema finalized"
        );
        Ok(Schema::from_parts(self.name, self.fields, self.required))
    }

    fn append(
        &mut self,
        name: Cow<'static, str>,
        default: Option<D>,
        ty: FieldType<T>,
        enforced: bool,
    ) {
        trace!(
            schema = %self.name,
            field = %name,
            nullable = ty.is_nullable(),
            enforced,
            "field accepted"
        );
        if enforced {
            self.required.insert(name.clone());
        }
        self.fields.push(Field {
            name,
            default,
            ty,
            enforced,
        });
    }
}

/// Composes one block in a single call: `SchemaBuilder::new(name).compose(decls)`.
pub fn compose<T, D>(
    name: impl Into<Cow<'static, str>>,
    decls: impl IntoIterator<Item = FieldDecl<T, D>>,
) -> Result<Schema<T, D>, SchemaError> {
    SchemaBuilder::new(name).compose(decls)
}
