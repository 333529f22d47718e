#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Declares structs from `field(name, type, options...)` lists.
///
/// See the `typedstruct` crate for the full syntax.
#[proc_macro]
pub fn typed_struct(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    typedstruct_macros_impl::typed_struct(input.into()).into()
}
