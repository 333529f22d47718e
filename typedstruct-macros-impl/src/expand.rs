use std::fmt;

use proc_macro2::{Ident, Span, TokenStream, TokenTree};
use quote::{format_ident, quote};
use typedstruct_core::{Field, FieldDecl, FieldOptions, FieldType, Schema, SchemaBuilder};
use unsynn::ToTokens;

use crate::SpannedError;
use crate::grammar::{AttributeInner, Block, FieldStmt};
use crate::options::{BlockOptions, parse_block_options, parse_field_options};
use crate::render::render_tokens;

/// A type annotation as the engine sees it: the tokens to splice back into
/// the generated struct, plus their source text for reflection.
#[derive(Debug, Clone)]
pub struct TypeTokens {
    /// Tokens as written.
    pub tokens: TokenStream,
    /// Rendered source text.
    pub text: String,
}

impl From<TokenStream> for TypeTokens {
    fn from(tokens: TokenStream) -> Self {
        let text = render_tokens(&tokens);
        Self { tokens, text }
    }
}

impl fmt::Display for TypeTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The engine instantiated over token streams.
pub type TokenSchema = Schema<TypeTokens, TokenStream>;

type TokenField = Field<TypeTokens, TokenStream>;

/// What a block needs besides its schema: where its pieces came from.
struct BlockParts {
    options: BlockOptions,
    /// Non-`typed_struct` attributes, forwarded to the struct.
    forwarded: Vec<TokenStream>,
}

/// Per-field data the engine doesn't carry.
struct FieldSite {
    span: Span,
    attributes: TokenStream,
}

fn block_parts(block: &Block) -> Result<BlockParts, SpannedError> {
    let mut options = BlockOptions::default();
    let mut seen = Vec::new();
    let mut forwarded = Vec::new();

    for attr in &block.attributes {
        match &attr.body.content {
            AttributeInner::TypedStruct(inner) => {
                parse_block_options(
                    &mut options,
                    &mut seen,
                    inner.options.content.iter().map(|d| &d.value),
                )?;
            }
            AttributeInner::Other(tokens) => {
                if let Some(TokenTree::Ident(ident)) = tokens.first()
                    && ident == "typed_struct"
                {
                    return Err(SpannedError::new(
                        "malformed `typed_struct` attribute: expected `#[typed_struct(option, ...)]`",
                        ident.span(),
                    ));
                }
                forwarded.push(attr.to_token_stream());
            }
        }
    }

    Ok(BlockParts { options, forwarded })
}

fn field_decl(stmt: &FieldStmt) -> Result<FieldDecl<TypeTokens, TokenStream>, SpannedError> {
    let args = &stmt.args.content;
    let name = args.name.to_string();
    let ty = args.ty.to_token_stream();
    if ty.is_empty() {
        return Err(SpannedError::new(
            format!("field `{name}` needs a type, as in `field({name}, u32)`"),
            args.name.span(),
        ));
    }

    let options = match &args.options {
        Some(cons) => parse_field_options(cons.second.iter().map(|d| &d.value))?,
        None => FieldOptions::default(),
    };

    Ok(FieldDecl {
        name: name.into(),
        ty: ty.into(),
        options,
    })
}

/// Runs one block through the engine. The first rejected declaration ends
/// the block and is reported at the offending token.
fn compose_block(
    block: &Block,
    options: &BlockOptions,
) -> Result<(TokenSchema, Vec<FieldSite>), SpannedError> {
    let mut builder = SchemaBuilder::new(block.name.to_string()).enforce_all(options.enforce);
    let mut sites = Vec::new();

    for stmt in block.body.content.iter() {
        let span = stmt.args.content.name.span();
        let decl = field_decl(stmt)?;
        builder
            .declare(decl)
            .map_err(|err| SpannedError::schema(&err, span))?;
        sites.push(FieldSite {
            span,
            attributes: stmt.attributes.iter().map(|a| a.to_token_stream()).collect(),
        });
    }

    let schema = builder
        .finish()
        .map_err(|err| SpannedError::schema(&err, block.name.span()))?;
    Ok((schema, sites))
}

/// Expands one `struct Name { field(...); ... }` block.
pub fn expand_block(block: &Block) -> TokenStream {
    let result = block_parts(block).and_then(|parts| {
        let (schema, sites) = compose_block(block, &parts.options)?;
        Ok(emit(block, &parts, &schema, &sites))
    });
    match result {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn effective_type(ty: &FieldType<TypeTokens>) -> TokenStream {
    match ty {
        FieldType::Declared(t) => t.tokens.clone(),
        FieldType::Nullable(t) => {
            let t = &t.tokens;
            quote! { ::core::option::Option<#t> }
        }
    }
}

fn descriptor(ts: &TokenStream, field: &TokenField) -> TokenStream {
    let name = field.name();
    let default = match &field.default {
        Some(expr) => {
            let text = render_tokens(expr);
            quote! { ::core::option::Option::Some(#text) }
        }
        None => quote! { ::core::option::Option::None },
    };
    let ty = match &field.ty {
        FieldType::Declared(t) => {
            let text = &t.text;
            quote! { #ts::FieldType::Declared(#text) }
        }
        FieldType::Nullable(t) => {
            let text = &t.text;
            quote! { #ts::FieldType::Nullable(#text) }
        }
    };
    let enforced = field.enforced;
    quote! {
        #ts::Field {
            name: #ts::__private::Cow::Borrowed(#name),
            default: #default,
            ty: #ty,
            enforced: #enforced,
        }
    }
}

/// Name of the `build()` local holding a field's value. Mixed-site hygiene
/// keeps it out of reach of default expressions written by the caller.
fn local_ident(field: &TokenField) -> Ident {
    Ident::new(&format!("__{}", field.name()), Span::mixed_site())
}

/// How `build()` fills a field the caller didn't set.
fn fill(
    ts: &TokenStream,
    struct_name: &str,
    ident: &Ident,
    local: &Ident,
    field: &TokenField,
) -> TokenStream {
    let name = field.name();
    if field.enforced {
        return quote! {
            let #local = match self.#ident {
                ::core::option::Option::Some(value) => value,
                ::core::option::Option::None => {
                    return ::core::result::Result::Err(
                        #ts::ConstructError::missing_required(#struct_name, #name),
                    );
                }
            };
        };
    }
    match &field.default {
        Some(expr) => quote! {
            let #local = match self.#ident {
                ::core::option::Option::Some(value) => value,
                ::core::option::Option::None => #expr,
            };
        },
        None => quote! {
            let #local = ::core::option::Option::flatten(self.#ident);
        },
    }
}

fn emit(
    block: &Block,
    parts: &BlockParts,
    schema: &TokenSchema,
    sites: &[FieldSite],
) -> TokenStream {
    let ts = parts
        .options
        .crate_path
        .clone()
        .unwrap_or_else(|| quote! { ::typedstruct });
    let name = &block.name;
    let name_str = name.to_string();
    let vis = block
        .vis
        .as_ref()
        .map(|v| v.to_token_stream())
        .unwrap_or_default();
    let forwarded = &parts.forwarded;
    let builder = format_ident!("{}Builder", name);

    let idents: Vec<Ident> = schema
        .fields()
        .iter()
        .zip(sites)
        .map(|(field, site)| Ident::new(field.name(), site.span))
        .collect();
    let types: Vec<TokenStream> = schema
        .fields()
        .iter()
        .map(|f| effective_type(&f.ty))
        .collect();
    let field_attrs = sites.iter().map(|s| &s.attributes);

    let setters = schema.fields().iter().zip(&idents).zip(&types).map(|((field, ident), ty)| {
        let doc = format!(" Sets `{}`.", field.name());
        quote! {
            #[doc = #doc]
            #vis fn #ident(mut self, value: impl ::core::convert::Into<#ty>) -> Self {
                self.#ident = ::core::option::Option::Some(value.into());
                self
            }
        }
    });
    let locals: Vec<Ident> = schema.fields().iter().map(local_ident).collect();
    let fills = schema
        .fields()
        .iter()
        .zip(&idents)
        .zip(&locals)
        .map(|((field, ident), local)| fill(&ts, &name_str, ident, local, field));
    let descriptors = schema.fields().iter().map(|f| descriptor(&ts, f));

    // A field called `build` takes the inherent name; `TypedBuilder::build` still works.
    let inherent_build = if schema.field("build").is_none() {
        quote! {
            /// Fills omitted fields and checks that every required field was set.
            #vis fn build(self) -> ::core::result::Result<#name, #ts::ConstructError> {
                <Self as #ts::TypedBuilder>::build(self)
            }
        }
    } else {
        TokenStream::new()
    };

    let default_impl = if schema.required().is_empty() {
        let values = schema.fields().iter().map(|field| match &field.default {
            Some(expr) => expr.clone(),
            None => quote! { ::core::option::Option::None },
        });
        quote! {
            impl ::core::default::Default for #name {
                fn default() -> Self {
                    Self {
                        #(#idents: #values,)*
                    }
                }
            }
        }
    } else {
        TokenStream::new()
    };

    let builder_doc = format!(" Builder for [`{name_str}`].");

    quote! {
        #(#forwarded)*
        #vis struct #name {
            #(#field_attrs #vis #idents: #types,)*
        }

        #[doc = #builder_doc]
        #[must_use]
        #vis struct #builder {
            #(#idents: ::core::option::Option<#types>,)*
        }

        impl ::core::default::Default for #builder {
            fn default() -> Self {
                Self {
                    #(#idents: ::core::option::Option::None,)*
                }
            }
        }

        #[allow(dead_code)]
        impl #builder {
            #(#setters)*

            #inherent_build
        }

        impl #ts::TypedBuilder for #builder {
            type Output = #name;

            fn build(self) -> ::core::result::Result<#name, #ts::ConstructError> {
                #(#fills)*
                ::core::result::Result::Ok(#name {
                    #(#idents: #locals,)*
                })
            }
        }

        #[allow(dead_code)]
        impl #name {
            /// Starts a builder with nothing supplied.
            #vis fn builder() -> #builder {
                <#builder as ::core::default::Default>::default()
            }
        }

        impl #ts::TypedStruct for #name {
            type Builder = #builder;

            const NAME: &'static str = #name_str;

            const FIELDS: &'static [#ts::StaticField] = &[
                #(#descriptors,)*
            ];
        }

        #default_impl
    }
}
