//! Keyword trigger tables.
//!
//! Two fixed tables drive the scanner: the top-level block triggers
//! (`style`, `script`, and the two `[Origin]` forms) and the CHTL-JS
//! reserved identifiers the sub-splicer keeps verbatim. Both lookups
//! use the word's length as a first-pass filter before comparing text,
//! so non-keyword identifiers are rejected with at most one comparison.

/// Top-level constructs the fragment dispatcher recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// `style { ... }` — body becomes one CSS fragment.
    StyleBlock,
    /// `script { ... }` — body goes through the sub-splicer.
    ScriptBlock,
    /// `[Origin] @JavaScript { ... }` — body is verbatim JS.
    OriginJavaScript,
    /// `[Origin] @Style { ... }` — body is verbatim CSS.
    OriginStyle,
}

impl Trigger {
    /// Human-readable construct name, for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Trigger::StyleBlock => "style block",
            Trigger::ScriptBlock => "script block",
            Trigger::OriginJavaScript => "origin JavaScript block",
            Trigger::OriginStyle => "origin style block",
        }
    }
}

/// Whether `b` can start an identifier.
#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Whether `b` can continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whitespace permitted between a trigger head and its opening `{`.
/// Newlines count: `style` and its brace may sit on different lines.
#[inline]
pub(crate) fn is_inter_token_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Look up a top-level trigger word (`style` / `script`).
///
/// The caller guarantees whole-word extent; anything longer
/// (`stylesheet`) arrives as a different string and misses.
pub(crate) fn block_trigger(word: &str) -> Option<Trigger> {
    match word.len() {
        5 if word == "style" => Some(Trigger::StyleBlock),
        6 if word == "script" => Some(Trigger::ScriptBlock),
        _ => None,
    }
}

/// Look up the `@Type` of an `[Origin]` block.
///
/// Only `@JavaScript` and `@Style` bypass CHTL processing; every other
/// origin type (e.g. `@Html`) stays CHTL text for the parser.
pub(crate) fn origin_trigger(type_name: &str) -> Option<Trigger> {
    match type_name {
        "JavaScript" => Some(Trigger::OriginJavaScript),
        "Style" => Some(Trigger::OriginStyle),
        _ => None,
    }
}

/// CHTL-JS reserved identifiers the sub-splicer keeps verbatim when they
/// head a `{ ... }` block or `( ... )` argument list.
///
/// Matched case-sensitively, exactly as the CHTL-JS compiler's token
/// table spells them.
pub(crate) fn is_chtl_js_keyword(word: &str) -> bool {
    let len = word.len();
    if !(3..=10).contains(&len) {
        return false;
    }
    match len {
        3 => word == "vir",
        4 => word == "util",
        6 => matches!(word, "Listen" | "Router"),
        7 => word == "Animate",
        8 => matches!(word, "Delegate"),
        10 => matches!(word, "iNeverAway" | "fileloader"),
        _ => false,
    }
}
