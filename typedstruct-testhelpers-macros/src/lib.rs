//! `#[typedstruct_testhelpers::test]`: a `#[test]` that sets up tracing first.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    struct BeforeFn {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    struct BeforeBody {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        before_fn: BeforeFn,
        _fn: KFn,
        name: Ident,
        before_body: BeforeBody,
        body: BraceGroup,
    }
}

/// Test attribute that calls `typedstruct_testhelpers::setup()` before the body.
///
/// ```ignore
/// #[typedstruct_testhelpers::test]
/// fn composes() {
///     // tracing output from typedstruct-core shows up here
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut iter = item.to_token_iter();
    let decl = match iter.parse::<TestFn>() {
        Ok(decl) => decl,
        Err(err) => {
            let msg = format!("#[typedstruct_testhelpers::test] expects a function: {err}");
            return quote::quote! { compile_error!(#msg); }.into();
        }
    };

    let before_fn = decl.before_fn.items.to_token_stream();
    let name = decl.name;
    let before_body = decl.before_body.items.to_token_stream();
    let body = decl.body.0.stream();

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #before_fn fn #name #before_body {
            ::typedstruct_testhelpers::setup();

            #body
        }
    }
    .into()
}
