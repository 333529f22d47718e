//! unsynn grammar for the body of `typed_struct! { ... }`.
//!
//! ```text
//! input      := block*
//! block      := attribute* vis? "struct" IDENT "{" field_stmt* "}"
//! field_stmt := attribute* "field" "(" NAME "," TYPE ("," option ("," option)* ","?)? ")" ";"?
//! option     := IDENT ("=" EXPR)?
//! ```
//!
//! `NAME` is any single token so that malformed names reach the validator
//! instead of failing the parse. `TYPE` and `EXPR` run up to the next comma
//! that is not nested in brackets or angle brackets.

use unsynn::*;

keyword! {
    /// The "struct" keyword.
    pub KStruct = "struct";
    /// The "pub" keyword.
    pub KPub = "pub";
    /// The "field" declaration keyword.
    pub KField = "field";
    /// The block options attribute name.
    pub KTypedStruct = "typed_struct";
}

operator! {
    /// `#` starting an attribute.
    pub PoundSign = "#";
    /// `=` between an option key and its value.
    pub Equals = "=";
    /// `;` after a field declaration.
    pub Semi = ";";
    /// `<` opening generic arguments.
    pub LAngle = "<";
    /// `>` closing generic arguments.
    pub RAngle = ">";
    /// `->` in function types, so its `>` never closes an angle bracket.
    pub ThinArrow = "->";
}

unsynn! {
    /// A token tree, or a whole `<...>` run so that commas inside generic
    /// arguments (`HashMap<K, V>`) don't end a type.
    pub struct AngleTokenTree(
        #[allow(clippy::type_complexity)]
        pub Either<
            ThinArrow,
            Either<Cons<LAngle, Vec<Cons<Except<RAngle>, AngleTokenTree>>, RAngle>, TokenTree>,
        >,
    );

    /// Verbatim tokens up to (not including) the next top-level comma.
    pub struct UntilComma(pub Vec<Cons<Except<Comma>, AngleTokenTree>>);

    /// `key` or `key = value`, in field options and block options alike.
    pub struct OptionEntry {
        /// Option key.
        pub key: Ident,
        /// `= value`, if present.
        pub value: Option<Cons<Equals, UntilComma>>,
    }

    /// `typed_struct(...)` inside `#[...]`.
    pub struct TypedStructAttr {
        /// `typed_struct`
        pub _kw: KTypedStruct,
        /// Block options.
        pub options: ParenthesisGroupContaining<CommaDelimitedVec<OptionEntry>>,
    }

    /// Contents of `#[...]`.
    pub enum AttributeInner {
        /// Block options for this crate.
        TypedStruct(TypedStructAttr),
        /// Anything else, forwarded as-is.
        Other(Vec<TokenTree>),
    }

    /// An outer attribute, `#[...]`. Doc comments arrive as `#[doc = "..."]`.
    pub struct Attribute {
        /// `#`
        pub _pound: PoundSign,
        /// `[...]`
        pub body: BracketGroupContaining<AttributeInner>,
    }

    /// Struct and field visibility.
    pub enum Vis {
        /// `pub(crate)`, `pub(super)`, `pub(in path)`.
        PubIn(Cons<KPub, ParenthesisGroup>),
        /// `pub`
        Pub(KPub),
    }

    /// The inside of `field(...)`.
    pub struct FieldArgs {
        /// Field name token, validated later.
        pub name: TokenTree,
        /// `,`
        pub _comma: Comma,
        /// The type annotation, passed through.
        pub ty: UntilComma,
        /// `, key = value, ...`
        pub options: Option<Cons<Comma, CommaDelimitedVec<OptionEntry>>>,
    }

    /// One `field(...);` declaration.
    pub struct FieldStmt {
        /// Attributes (docs, `#[serde(...)]`, ...) forwarded to the struct field.
        pub attributes: Vec<Attribute>,
        /// `field`
        pub _field: KField,
        /// `(...)`
        pub args: ParenthesisGroupContaining<FieldArgs>,
        /// Optional trailing `;`
        pub _semi: Option<Semi>,
    }

    /// One declaration block: a struct and its fields.
    pub struct Block {
        /// Attributes, including `#[typed_struct(...)]` block options.
        pub attributes: Vec<Attribute>,
        /// Visibility of the struct, its fields and its builder.
        pub vis: Option<Vis>,
        /// `struct`
        pub _struct: KStruct,
        /// Struct name.
        pub name: Ident,
        /// `{ field(...); ... }`
        pub body: BraceGroupContaining<Vec<FieldStmt>>,
    }
}
