//! Renders token streams back to the source text reflection reports.
//!
//! `TokenStream::to_string` spaces every token (`Vec < String >`), which is
//! fine for rustc but not for the strings `types()` and `defaults()` hand to
//! users. This renderer only puts spaces where source code usually has them.

use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};

/// Renders `tokens` as compact, conventionally spaced source text.
pub fn render_tokens(tokens: &TokenStream) -> String {
    let mut out = String::new();
    render_into(tokens.clone(), &mut out);
    out
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Word,
    /// `mut`, `dyn` and friends: a following group is spaced like a word.
    Keyword,
    Punct,
    /// After `,` `;` `->` `=` or a field colon: always followed by a space.
    Separator,
    Close,
}

const SPACED_KEYWORDS: &[&str] = &["mut", "dyn", "impl", "const", "as", "in"];

fn render_into(tokens: TokenStream, out: &mut String) {
    let mut prev = Prev::Start;
    let mut iter = tokens.into_iter().peekable();

    while let Some(tt) = iter.next() {
        if prev == Prev::Separator {
            out.push(' ');
        }
        match tt {
            TokenTree::Ident(ident) => {
                if matches!(prev, Prev::Word | Prev::Keyword | Prev::Close) {
                    out.push(' ');
                }
                let text = ident.to_string();
                prev = if SPACED_KEYWORDS.contains(&text.as_str()) {
                    Prev::Keyword
                } else {
                    Prev::Word
                };
                out.push_str(&text);
            }
            TokenTree::Literal(lit) => {
                if matches!(prev, Prev::Word | Prev::Keyword) {
                    out.push(' ');
                }
                out.push_str(&lit.to_string());
                prev = Prev::Word;
            }
            TokenTree::Punct(punct) => {
                let ch = punct.as_char();
                let alone = punct.spacing() == Spacing::Alone;
                let arrow = ch == '-'
                    && !alone
                    && matches!(iter.peek(), Some(TokenTree::Punct(next)) if next.as_char() == '>');
                if arrow {
                    iter.next();
                    if !matches!(prev, Prev::Start | Prev::Separator) {
                        out.push(' ');
                    }
                    out.push_str("->");
                    prev = Prev::Separator;
                    continue;
                }
                let after_operand = matches!(prev, Prev::Word | Prev::Keyword | Prev::Close);
                if prev == Prev::Keyword
                    || (ch == '\'' && prev == Prev::Word)
                    || (ch == '=' && alone && after_operand)
                {
                    out.push(' ');
                }
                out.push(ch);
                prev = match ch {
                    ',' | ';' => Prev::Separator,
                    '=' if alone => Prev::Separator,
                    ':' if alone && after_operand => Prev::Separator,
                    _ => Prev::Punct,
                };
            }
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{ ", " }"),
                    Delimiter::None => {
                        render_into(group.stream(), out);
                        prev = Prev::Close;
                        continue;
                    }
                };
                let brace = group.delimiter() == Delimiter::Brace;
                if prev == Prev::Keyword || (brace && matches!(prev, Prev::Word | Prev::Close)) {
                    out.push(' ');
                }
                if brace && group.stream().is_empty() {
                    out.push_str("{}");
                } else {
                    out.push_str(open);
                    render_into(group.stream(), out);
                    out.push_str(close);
                }
                prev = Prev::Close;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn generic_types() {
        assert_eq!(render_tokens(&quote!(Vec<String>)), "Vec<String>");
        assert_eq!(
            render_tokens(&quote!(HashMap<String, u32>)),
            "HashMap<String, u32>"
        );
        assert_eq!(
            render_tokens(&quote!(::std::collections::BTreeMap<u8, Vec<u8>>)),
            "::std::collections::BTreeMap<u8, Vec<u8>>"
        );
    }

    #[test]
    fn references_and_lifetimes() {
        assert_eq!(render_tokens(&quote!(&'static str)), "&'static str");
        assert_eq!(render_tokens(&quote!(&mut [u8])), "&mut [u8]");
        assert_eq!(render_tokens(&quote!(Box<dyn Fn(u8)>)), "Box<dyn Fn(u8)>");
        assert_eq!(render_tokens(&quote!(impl ::core::fmt::Debug)), "impl ::core::fmt::Debug");
    }

    #[test]
    fn tuples_and_fn_pointers() {
        assert_eq!(render_tokens(&quote!((u8, i64))), "(u8, i64)");
        assert_eq!(render_tokens(&quote!(fn(u8) -> bool)), "fn(u8) -> bool");
    }

    #[test]
    fn default_expressions() {
        assert_eq!(
            render_tokens(&quote!(String::from("anon"))),
            "String::from(\"anon\")"
        );
        assert_eq!(render_tokens(&quote!(-1)), "-1");
        assert_eq!(render_tokens(&quote!([0u8; 4])), "[0u8; 4]");
        assert_eq!(render_tokens(&quote!(vec![1, 2, 3])), "vec![1, 2, 3]");
    }
}
