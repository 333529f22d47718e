#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

// Lets code generated by `typed_struct!` name `::typedstruct` from inside this crate.
extern crate self as typedstruct;

pub use typedstruct_core::*;

pub use typedstruct_macros::typed_struct;

/// Paths used by code that `typed_struct!` generates. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use std::borrow::Cow;
}
