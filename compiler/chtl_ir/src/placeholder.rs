//! Placeholder registry for spliced script bodies.
//!
//! When the scanner splices a `script { }` body, every run of plain
//! JavaScript is elided and replaced by a synthetic token of the form
//! `__CHTL_JS_PLACEHOLDER_<n>__`. The [`PlaceholderMap`] records the
//! token → original-text correlation so the CHTL-JS compiler can splice
//! the elided text back after transforming the CHTL-JS constructs around
//! it.
//!
//! The map is append-only: entries are never removed or overwritten within
//! one scan, numbering is monotonic from zero, and tokens are never reused
//! across scans (each scan owns a fresh map — there is deliberately no
//! process-wide counter, so parallel scans of independent files never share
//! numbering).

use std::fmt;

/// Leading text of every placeholder token.
pub const PLACEHOLDER_PREFIX: &str = "__CHTL_JS_PLACEHOLDER_";

/// Trailing text of every placeholder token.
pub const PLACEHOLDER_SUFFIX: &str = "__";

/// Append-only registry from placeholder token to the elided original text.
///
/// Backed by a plain `Vec`: the token's numeric suffix is the entry index,
/// so `resolve` is a parse plus an indexed read, no hashing.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct PlaceholderMap {
    entries: Vec<String>,
}

impl PlaceholderMap {
    /// Create an empty map.
    pub fn new() -> Self {
        PlaceholderMap::default()
    }

    /// Allocate the next sequential token and record `text` under it.
    ///
    /// Returns the token, e.g. `__CHTL_JS_PLACEHOLDER_0__` for the first
    /// call on a fresh map.
    pub fn create(&mut self, text: impl Into<String>) -> String {
        let token = token_for(self.entries.len());
        self.entries.push(text.into());
        token
    }

    /// Look up the original text for a token.
    ///
    /// Returns `None` for anything that is not a canonical token issued by
    /// this map. An unknown token here is a programming error in a
    /// downstream consumer, never a user-facing condition — the assembly
    /// layer turns `None` into a fatal internal error.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        let index = parse_token_index(token)?;
        self.entries.get(index).map(String::as_str)
    }

    /// Number of placeholders allocated so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no placeholder has been allocated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(token, text)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, text)| (token_for(i), text.as_str()))
    }
}

impl fmt::Display for PlaceholderMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} placeholder(s)", self.entries.len())?;
        for (token, text) in self.iter() {
            writeln!(f, "  {token} => {text:?}")?;
        }
        Ok(())
    }
}

/// Format the canonical token for entry `index`.
fn token_for(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}{PLACEHOLDER_SUFFIX}")
}

/// Parse a canonical token back to its entry index.
///
/// Rejects non-canonical spellings (leading zeros, missing suffix, empty
/// digits) so that only tokens actually issued by [`PlaceholderMap::create`]
/// round-trip.
fn parse_token_index(token: &str) -> Option<usize> {
    let digits = token
        .strip_prefix(PLACEHOLDER_PREFIX)?
        .strip_suffix(PLACEHOLDER_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Canonical form has no leading zeros (except "0" itself).
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

/// Whether `text` has the exact shape of a placeholder token.
pub fn is_placeholder_token(text: &str) -> bool {
    parse_token_index(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_numbers_monotonically_from_zero() {
        let mut map = PlaceholderMap::new();
        assert_eq!(map.create("a"), "__CHTL_JS_PLACEHOLDER_0__");
        assert_eq!(map.create("b"), "__CHTL_JS_PLACEHOLDER_1__");
        assert_eq!(map.create("c"), "__CHTL_JS_PLACEHOLDER_2__");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn resolve_returns_recorded_text() {
        let mut map = PlaceholderMap::new();
        let token = map.create("const a = 1;");
        assert_eq!(map.resolve(&token), Some("const a = 1;"));
    }

    #[test]
    fn resolve_unknown_index_is_none() {
        let mut map = PlaceholderMap::new();
        map.create("x");
        assert_eq!(map.resolve("__CHTL_JS_PLACEHOLDER_1__"), None);
    }

    #[test]
    fn resolve_rejects_non_canonical_spellings() {
        let mut map = PlaceholderMap::new();
        map.create("x");
        assert_eq!(map.resolve("__CHTL_JS_PLACEHOLDER_00__"), None);
        assert_eq!(map.resolve("__CHTL_JS_PLACEHOLDER___"), None);
        assert_eq!(map.resolve("__CHTL_JS_PLACEHOLDER_0"), None);
        assert_eq!(map.resolve("CHTL_JS_PLACEHOLDER_0__"), None);
        assert_eq!(map.resolve("__CHTL_JS_PLACEHOLDER_0a__"), None);
    }

    #[test]
    fn entries_are_never_overwritten() {
        let mut map = PlaceholderMap::new();
        let first = map.create("one");
        map.create("two");
        assert_eq!(map.resolve(&first), Some("one"));
    }

    #[test]
    fn empty_text_is_a_valid_entry() {
        let mut map = PlaceholderMap::new();
        let token = map.create("");
        assert_eq!(map.resolve(&token), Some(""));
        assert!(!map.is_empty());
    }

    #[test]
    fn iter_yields_allocation_order() {
        let mut map = PlaceholderMap::new();
        map.create("a");
        map.create("b");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("__CHTL_JS_PLACEHOLDER_0__".to_string(), "a"),
                ("__CHTL_JS_PLACEHOLDER_1__".to_string(), "b"),
            ]
        );
    }

    #[test]
    fn token_shape_recognition() {
        assert!(is_placeholder_token("__CHTL_JS_PLACEHOLDER_0__"));
        assert!(is_placeholder_token("__CHTL_JS_PLACEHOLDER_42__"));
        assert!(!is_placeholder_token("__CHTL_JS_PLACEHOLDER__"));
        assert!(!is_placeholder_token("__CHTL_PLACEHOLDER_0__"));
        assert!(!is_placeholder_token("plain text"));
    }

    #[test]
    fn fresh_maps_do_not_share_numbering() {
        let mut a = PlaceholderMap::new();
        let mut b = PlaceholderMap::new();
        a.create("x");
        assert_eq!(b.create("y"), "__CHTL_JS_PLACEHOLDER_0__");
    }
}
