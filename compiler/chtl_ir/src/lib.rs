//! Shared data model for the CHTL compiler.
//!
//! This crate holds the types that cross crate boundaries in the pipeline:
//!
//! - [`Span`] — compact byte-offset range into a source file
//! - [`FragmentType`] / [`CodeFragment`] — a maximal source span tagged with
//!   the sub-language it belongs to
//! - [`PlaceholderMap`] — the append-only registry correlating synthetic
//!   placeholder tokens with elided plain-JS text
//!
//! It deliberately contains no scanning logic: the scanner produces these
//! values, the per-language compilers consume them.

mod fragment;
mod placeholder;
mod span;

pub use fragment::{CodeFragment, FragmentType};
pub use placeholder::{
    is_placeholder_token, PlaceholderMap, PLACEHOLDER_PREFIX, PLACEHOLDER_SUFFIX,
};
pub use span::{Span, SpanError};
