#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

// ============================================================================
// DECLARATION SIDE: validator, resolver, accumulator
// ============================================================================

mod name;
pub use name::*;

mod nullability;
pub use nullability::*;

mod decl;
pub use decl::*;

mod builder;
pub use builder::*;

// ============================================================================
// EMISSION SIDE: finalized schema, projections, constructors
// ============================================================================

mod field;
pub use field::*;

mod schema;
pub use schema::*;

pub mod projection;
pub use projection::TypeDescriptor;

mod type_expr;
pub use type_expr::*;

mod value;
pub use value::*;

mod record;
pub use record::*;

mod reflect;
pub use reflect::*;

mod error;
pub use error::*;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}
