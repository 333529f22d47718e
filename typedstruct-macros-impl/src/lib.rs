#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use proc_macro2::{Delimiter, TokenStream, TokenTree};
use quote::quote;
use unsynn::{Cons, EndOfStream, IParse, ToTokenIter};

// ============================================================================
// PARSING
// ============================================================================

/// unsynn grammar for declaration blocks
pub mod grammar;

mod options;
pub use options::*;

mod error;
pub use error::*;

/// Source text of types and default expressions
pub mod render;

// ============================================================================
// CODE EMISSION
// ============================================================================

mod expand;
pub use expand::*;

/// Flattens `Delimiter::None` groups, which show up when the macro is invoked
/// from another `macro_rules!` with `$ty:ty` fragments.
fn flatten_transparent_groups(input: TokenStream) -> TokenStream {
    input
        .into_iter()
        .flat_map(|tt| match tt {
            TokenTree::Group(group) if group.delimiter() == Delimiter::None => {
                flatten_transparent_groups(group.stream())
            }
            TokenTree::Group(group) => {
                let flattened = flatten_transparent_groups(group.stream());
                let mut new_group = proc_macro2::Group::new(group.delimiter(), flattened);
                new_group.set_span(group.span());
                std::iter::once(TokenTree::Group(new_group)).collect()
            }
            other => std::iter::once(other).collect(),
        })
        .collect()
}

/// Expands the body of `typed_struct! { ... }`: each block becomes a struct,
/// its builder, and its reflection impls. A block with an invalid
/// declaration expands to a single `compile_error!` and nothing else.
pub fn typed_struct(input: TokenStream) -> TokenStream {
    let input = flatten_transparent_groups(input);
    let mut it = input.to_token_iter();
    let blocks = match it.parse::<Cons<Vec<grammar::Block>, EndOfStream>>() {
        Ok(parsed) => parsed.first,
        Err(err) => {
            let msg = format!("typed_struct!: could not parse declaration blocks: {err}");
            return quote! { compile_error!(#msg); };
        }
    };

    blocks.iter().map(expand_block).collect()
}
