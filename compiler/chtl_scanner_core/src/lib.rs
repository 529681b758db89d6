//! Standalone lexical layer for the CHTL Unified Scanner.
//!
//! This crate knows nothing about CHTL's trigger keywords or fragment
//! types. It provides the comment/string-blind primitives the scanner is
//! built from:
//!
//! - [`SourceBuffer`] — sentinel-terminated copy of the source for
//!   bounds-check-free byte scanning
//! - [`Cursor`] — `Copy` position tracker with memchr-accelerated bulk
//!   skips
//! - the lexical skippers ([`skip_string`], [`skip_line_comment`],
//!   [`skip_block_comment`]) — consume one construct each, classify
//!   nothing
//! - [`match_delimiter`] — nesting-aware, skipper-aware delimiter matching
//!   for brace and parenthesis pairs
//!
//! Everything here advances a cursor and reports whether the construct was
//! terminated; interpretation of the consumed text belongs to the caller.

mod cursor;
mod delim;
mod skip;
mod source_buffer;

pub use cursor::Cursor;
pub use delim::{match_delimiter, DelimKind, MatchOutcome};
pub use skip::{skip_block_comment, skip_line_comment, skip_string, SkipOutcome};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
