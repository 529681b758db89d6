//! Document reassembly helpers.
//!
//! The scanner's downstream contract: per-language compilers transform
//! each fragment's content, then the document is reconstituted by
//! replacing every fragment's span with its compiled output, in original
//! order. Before a `ChtlJs` output is final, every remaining placeholder
//! token **must** be resolved back to its elided text —
//! [`resolve_placeholders`] is that step, and skipping it is the one bug
//! class this design exists to prevent.
//!
//! Errors here are internal-consistency failures (a bug in the scanner or
//! a downstream consumer), never user-facing conditions; they carry S9xxx
//! codes and are always fatal.

use std::fmt;

use chtl_ir::{
    is_placeholder_token, CodeFragment, PlaceholderMap, Span, PLACEHOLDER_PREFIX,
    PLACEHOLDER_SUFFIX,
};

/// Fatal internal-consistency error during assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssembleError {
    /// A placeholder token that the map never issued. Points at a
    /// downstream consumer inventing or corrupting tokens.
    UnknownPlaceholder { token: String },
    /// The fragment list does not tile the source: fragment `index`
    /// starts at `found` where `expected` was required. Points at a
    /// scanner bug.
    OverlappingFragment {
        index: usize,
        expected: u32,
        found: Span,
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::UnknownPlaceholder { token } => {
                write!(f, "unknown placeholder token `{token}` [S9001]")
            }
            AssembleError::OverlappingFragment {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "fragment {index} covers {found} but byte {expected} was expected next [S9002]"
                )
            }
        }
    }
}

impl std::error::Error for AssembleError {}

/// Replace every placeholder token in `text` with its mapped text.
///
/// Only canonical tokens (`__CHTL_JS_PLACEHOLDER_<n>__`, no leading
/// zeros) are treated as placeholders; anything else that merely starts
/// with the prefix passes through as literal text. A canonical token the
/// map never issued is a fatal [`AssembleError::UnknownPlaceholder`].
pub fn resolve_placeholders(
    text: &str,
    placeholders: &PlaceholderMap,
) -> Result<String, AssembleError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(found) = rest.find(PLACEHOLDER_PREFIX) {
        out.push_str(&rest[..found]);
        let candidate = &rest[found..];
        match token_length(candidate) {
            Some(len) => {
                let token = &candidate[..len];
                match placeholders.resolve(token) {
                    Some(original) => out.push_str(original),
                    None => {
                        return Err(AssembleError::UnknownPlaceholder {
                            token: token.to_string(),
                        })
                    }
                }
                rest = &candidate[len..];
            }
            None => {
                // Prefix without a full token: literal text.
                out.push_str(PLACEHOLDER_PREFIX);
                rest = &candidate[PLACEHOLDER_PREFIX.len()..];
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Length of the canonical token at the start of `candidate` (which
/// begins with the prefix), or `None` if no canonical token starts here.
fn token_length(candidate: &str) -> Option<usize> {
    let after_prefix = &candidate[PLACEHOLDER_PREFIX.len()..];
    let digits = after_prefix
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    let len = PLACEHOLDER_PREFIX.len() + digits + PLACEHOLDER_SUFFIX.len();
    let token = candidate.get(..len)?;
    is_placeholder_token(token).then_some(len)
}

/// Check that `fragments` are ordered, non-overlapping, and jointly
/// cover `0..source_len` with no gaps.
pub fn verify_coverage(
    fragments: &[CodeFragment],
    source_len: u32,
) -> Result<(), AssembleError> {
    let mut expected = 0u32;
    for (index, frag) in fragments.iter().enumerate() {
        if frag.span.start != expected || frag.span.end < frag.span.start {
            return Err(AssembleError::OverlappingFragment {
                index,
                expected,
                found: frag.span,
            });
        }
        expected = frag.span.end;
    }
    if expected != source_len {
        return Err(AssembleError::OverlappingFragment {
            index: fragments.len(),
            expected,
            found: Span::new(source_len, source_len),
        });
    }
    Ok(())
}

/// Reconstitute the document: verify coverage, then replace each
/// fragment's span with `compile`'s output for it, in original order.
///
/// With an identity `compile` (returning the spanned source text), the
/// result is the input source, byte-for-byte.
pub fn assemble<F>(
    source_len: u32,
    fragments: &[CodeFragment],
    mut compile: F,
) -> Result<String, AssembleError>
where
    F: FnMut(&CodeFragment) -> String,
{
    verify_coverage(fragments, source_len)?;
    let mut out = String::new();
    for frag in fragments {
        out.push_str(&compile(frag));
    }
    Ok(out)
}
