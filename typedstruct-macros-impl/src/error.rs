use proc_macro2::{Span, TokenStream};
use quote::quote_spanned;
use typedstruct_core::SchemaError;

/// A declaration-time error, pinned to the token that caused it.
#[derive(Debug)]
pub struct SpannedError {
    /// The error message.
    pub message: String,
    /// Where rustc should point.
    pub span: Span,
}

impl SpannedError {
    /// Wraps a schema error with the span of the offending token.
    pub fn schema(error: &SchemaError, span: Span) -> Self {
        Self {
            message: error.to_string(),
            span,
        }
    }

    /// A free-form error at `span`.
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Emits `compile_error!` at the stored span.
    pub fn to_compile_error(&self) -> TokenStream {
        let message = &self.message;
        quote_spanned! { self.span =>
            compile_error!(#message);
        }
    }
}
