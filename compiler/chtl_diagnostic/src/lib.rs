//! Diagnostic system for the CHTL compiler.
//!
//! Diagnostics carry:
//! - an error code for searchability
//! - a clear message (what went wrong)
//! - a primary span (where it went wrong)
//! - context labels and notes (why it's wrong)
//! - suggestions (how to fix it)
//!
//! Line and column numbers are derived lazily from byte offsets via
//! [`LineOffsetTable`], so producers only ever deal in spans.

mod diagnostic;
mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use emitter::{DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use span_utils::LineOffsetTable;
