//! The CHTL Unified Scanner.
//!
//! A single-pass lexical dispatcher that partitions raw CHTL source into
//! ordered, typed fragments — template markup, CSS, plain JS, and CHTL-JS
//! — without a full grammar for any of them. Within `script` blocks it
//! further separates plain JavaScript from CHTL-JS syntax by eliding
//! plain-JS runs into placeholder tokens recorded in a reversible map.
//!
//! ```
//! use chtl_scanner::{FragmentType, Scanner};
//!
//! let result = Scanner::new("div { script { const a = 1; {{box}}->show(); } }").scan();
//!
//! let kinds: Vec<_> = result.fragments.iter().map(|f| f.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![FragmentType::Chtl, FragmentType::ChtlJs, FragmentType::Chtl]
//! );
//! assert_eq!(
//!     result.placeholders.resolve("__CHTL_JS_PLACEHOLDER_0__"),
//!     Some(" const a = 1; ")
//! );
//! ```
//!
//! # Guarantees
//!
//! - **Round-trip**: fragment spans tile the source; concatenating them
//!   in order reproduces the input byte-for-byte.
//! - **Placeholder round-trip**: substituting every placeholder in a
//!   `ChtlJs` fragment with its mapped text reconstructs the original
//!   script-block body exactly.
//! - **Immunity**: trigger keywords inside string literals or comments
//!   never fire, and a trigger word that prefixes a longer identifier
//!   (`stylesheet`) never fires.
//! - **Recovery**: unterminated constructs consume to end of input, are
//!   reported with the opening token's offset, and never abort the scan.
//!
//! Downstream, each compiler consumes the fragments of its language; the
//! CHTL-JS compiler must run [`resolve_placeholders`] over its output
//! before the document is reassembled with [`assemble`].

mod assemble;
mod scan_error;
mod scanner;
mod splicer;
mod triggers;

pub use assemble::{assemble, resolve_placeholders, verify_coverage, AssembleError};
pub use scan_error::{ScanContext, ScanError, ScanErrorKind};
pub use scanner::{ScanResult, Scanner};
pub use triggers::Trigger;

// The shared data model, re-exported for downstream convenience.
pub use chtl_ir::{CodeFragment, FragmentType, PlaceholderMap, Span};
