//! Turns parsed `key = value` entries into typed options.

use proc_macro2::{Span, TokenStream};
use typedstruct_core::{FIELD_OPTION_KEYS, FieldOptions, SchemaError, unknown_option};
use unsynn::ToTokens;

use crate::SpannedError;
use crate::grammar::OptionEntry;
use crate::render::render_tokens;

/// Option keys accepted by `#[typed_struct(...)]` on a block.
pub const BLOCK_OPTION_KEYS: &[&str] = &["enforce", "crate"];

/// Block-level options from `#[typed_struct(...)]`.
#[derive(Debug, Default)]
pub struct BlockOptions {
    /// `enforce` applies to every field without a default or explicit flag.
    pub enforce: bool,
    /// Path to the runtime crate, `::typedstruct` when not given.
    pub crate_path: Option<TokenStream>,
}

/// The value of an option, if any, as a token stream.
fn entry_value(entry: &OptionEntry) -> Option<TokenStream> {
    entry
        .value
        .as_ref()
        .map(|cons| cons.second.to_token_stream())
}

/// Parses an `enforce` flag: bare `enforce` or `enforce = true|false`.
fn parse_flag(key: &str, value: Option<TokenStream>, span: Span) -> Result<bool, SpannedError> {
    let Some(value) = value else {
        return Ok(true);
    };
    match render_tokens(&value).as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SpannedError::schema(
            &SchemaError::InvalidOptionValue {
                key: key.into(),
                expected: "`true` or `false`",
            },
            span,
        )),
    }
}

fn duplicate(key: &str, span: Span) -> SpannedError {
    SpannedError::schema(&SchemaError::DuplicateOption { key: key.into() }, span)
}

/// Collects `default = expr` and `enforce[ = bool]` for one field.
pub fn parse_field_options<'a>(
    entries: impl IntoIterator<Item = &'a OptionEntry>,
) -> Result<FieldOptions<TokenStream>, SpannedError> {
    let mut options = FieldOptions::default();

    for entry in entries {
        let key = entry.key.to_string();
        let span = entry.key.span();
        match key.as_str() {
            "default" => {
                if options.default.is_some() {
                    return Err(duplicate(&key, span));
                }
                let value = entry_value(entry).filter(|v| !v.is_empty()).ok_or_else(|| {
                    SpannedError::schema(
                        &SchemaError::InvalidOptionValue {
                            key: key.clone(),
                            expected: "an expression, as in `default = 0`",
                        },
                        span,
                    )
                })?;
                options.default = Some(value);
            }
            "enforce" => {
                if options.enforce.is_some() {
                    return Err(duplicate(&key, span));
                }
                options.enforce = Some(parse_flag(&key, entry_value(entry), span)?);
            }
            _ => {
                return Err(SpannedError::schema(
                    &unknown_option(&key, FIELD_OPTION_KEYS),
                    span,
                ));
            }
        }
    }

    Ok(options)
}

/// Collects `enforce[ = bool]` and `crate = path` for one block. Repeated
/// `#[typed_struct(...)]` attributes are merged, repeated keys rejected.
pub fn parse_block_options<'a>(
    options: &mut BlockOptions,
    seen: &mut Vec<String>,
    entries: impl IntoIterator<Item = &'a OptionEntry>,
) -> Result<(), SpannedError> {
    for entry in entries {
        let key = entry.key.to_string();
        let span = entry.key.span();
        if seen.contains(&key) {
            return Err(duplicate(&key, span));
        }
        match key.as_str() {
            "enforce" => {
                options.enforce = parse_flag(&key, entry_value(entry), span)?;
            }
            "crate" => {
                let path = entry_value(entry).filter(|v| !v.is_empty()).ok_or_else(|| {
                    SpannedError::schema(
                        &SchemaError::InvalidOptionValue {
                            key: key.clone(),
                            expected: "a path, as in `crate = ::typedstruct`",
                        },
                        span,
                    )
                })?;
                options.crate_path = Some(path);
            }
            _ => {
                return Err(SpannedError::schema(
                    &unknown_option(&key, BLOCK_OPTION_KEYS),
                    span,
                ));
            }
        }
        seen.push(key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use unsynn::{CommaDelimitedVec, IParse, ToTokenIter};

    fn entries(tokens: TokenStream) -> CommaDelimitedVec<OptionEntry> {
        let mut it = tokens.to_token_iter();
        it.parse::<CommaDelimitedVec<OptionEntry>>().unwrap()
    }

    #[test]
    fn default_and_enforce() {
        let parsed = entries(quote!(default = String::from("x"), enforce));
        let options = parse_field_options(parsed.iter().map(|d| &d.value)).unwrap();
        assert_eq!(
            render_tokens(&options.default.unwrap()),
            "String::from(\"x\")"
        );
        assert_eq!(options.enforce, Some(true));
    }

    #[test]
    fn default_keeps_generic_commas() {
        let parsed = entries(quote!(default = HashMap::<u8, u8>::new(), enforce = false));
        let options = parse_field_options(parsed.iter().map(|d| &d.value)).unwrap();
        assert_eq!(
            render_tokens(&options.default.unwrap()),
            "HashMap::<u8, u8>::new()"
        );
        assert_eq!(options.enforce, Some(false));
    }

    #[test]
    fn unknown_field_option() {
        let parsed = entries(quote!(defualt = 1));
        let err = parse_field_options(parsed.iter().map(|d| &d.value)).unwrap_err();
        assert_eq!(
            err.message,
            "unknown option `defualt`, did you mean `default`?"
        );
    }

    #[test]
    fn repeated_field_option() {
        let parsed = entries(quote!(enforce, enforce = false));
        let err = parse_field_options(parsed.iter().map(|d| &d.value)).unwrap_err();
        assert_eq!(err.message, "option `enforce` given more than once");
    }

    #[test]
    fn enforce_needs_a_bool() {
        let parsed = entries(quote!(enforce = 3));
        let err = parse_field_options(parsed.iter().map(|d| &d.value)).unwrap_err();
        assert_eq!(err.message, "option `enforce` expects `true` or `false`");
    }

    #[test]
    fn default_needs_a_value() {
        let parsed = entries(quote!(default));
        let err = parse_field_options(parsed.iter().map(|d| &d.value)).unwrap_err();
        assert_eq!(
            err.message,
            "option `default` expects an expression, as in `default = 0`"
        );
    }

    #[test]
    fn block_options() {
        let mut options = BlockOptions::default();
        let mut seen = Vec::new();
        let parsed = entries(quote!(enforce, crate = ::my_reexport::typedstruct));
        parse_block_options(&mut options, &mut seen, parsed.iter().map(|d| &d.value))
            .unwrap();
        assert!(options.enforce);
        assert_eq!(
            render_tokens(&options.crate_path.unwrap()),
            "::my_reexport::typedstruct"
        );

        let parsed = entries(quote!(enforce = false));
        let mut options = BlockOptions::default();
        let err = parse_block_options(&mut options, &mut seen, parsed.iter().map(|d| &d.value))
            .unwrap_err();
        assert_eq!(err.message, "option `enforce` given more than once");
    }

    #[test]
    fn unknown_block_option() {
        let mut options = BlockOptions::default();
        let parsed = entries(quote!(enfroce));
        let err =
            parse_block_options(&mut options, &mut Vec::new(), parsed.iter().map(|d| &d.value))
                .unwrap_err();
        assert_eq!(
            err.message,
            "unknown option `enfroce`, did you mean `enforce`?"
        );
    }
}
