//! Typed source fragments.
//!
//! The Unified Scanner partitions a CHTL source file into an ordered list
//! of [`CodeFragment`] values. Each fragment is a maximal contiguous span
//! tagged with the sub-language its content belongs to; downstream
//! compilers pick the fragments of their language and treat the rest as
//! opaque holes to be refilled at assembly time.

use std::fmt;

use crate::Span;

/// The sub-language a fragment belongs to.
///
/// This is a closed set: the scanner emits exactly one of the first four
/// variants for every fragment. `Unknown` exists as a defensive default and
/// must never appear in the output of a correct scan.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FragmentType {
    /// CHTL template markup — all untriggered top-level text.
    Chtl,
    /// CSS — the body of a `style { }` block or an `[Origin] @Style` block.
    Css,
    /// Plain JavaScript — the body of an `[Origin] @JavaScript` block,
    /// passed through verbatim with no placeholder involvement.
    Js,
    /// Spliced script-block body: placeholder tokens standing in for plain
    /// JS runs, interleaved with verbatim CHTL-JS syntax.
    ChtlJs,
    /// Defensive default; never produced by a correct scan.
    #[default]
    Unknown,
}

impl FragmentType {
    /// Whether fragments of this type bypass CHTL processing entirely
    /// (their content is handed verbatim to a foreign-language compiler).
    pub fn is_foreign(self) -> bool {
        matches!(self, FragmentType::Css | FragmentType::Js)
    }
}

impl fmt::Display for FragmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FragmentType::Chtl => "CHTL",
            FragmentType::Css => "CSS",
            FragmentType::Js => "JS",
            FragmentType::ChtlJs => "CHTL-JS",
            FragmentType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One scanned fragment: a tagged payload plus its original source extent.
///
/// `span` always covers the fragment's full extent in the original source.
/// For untriggered CHTL text, `content` equals the spanned text. For
/// triggered blocks the two differ: the span covers the whole construct
/// (trigger keyword through closing delimiter), while `content` is the
/// payload handed downstream — the delimiter-exclusive body, spliced with
/// placeholders in the `ChtlJs` case.
///
/// Fragments are immutable once produced. Concatenating every fragment's
/// span over the source, in order, reproduces the input byte-for-byte.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CodeFragment {
    /// The sub-language of `content`.
    pub kind: FragmentType,
    /// The payload handed to the downstream compiler for `kind`.
    pub content: String,
    /// The fragment's extent in the original source.
    pub span: Span,
}

impl CodeFragment {
    /// Create a new fragment.
    pub fn new(kind: FragmentType, content: impl Into<String>, span: Span) -> Self {
        CodeFragment {
            kind,
            content: content.into(),
            span,
        }
    }
}

impl fmt::Display for CodeFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}] {:?}", self.kind, self.span, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_types() {
        assert!(FragmentType::Css.is_foreign());
        assert!(FragmentType::Js.is_foreign());
        assert!(!FragmentType::Chtl.is_foreign());
        assert!(!FragmentType::ChtlJs.is_foreign());
        assert!(!FragmentType::Unknown.is_foreign());
    }

    #[test]
    fn display_names() {
        assert_eq!(FragmentType::Chtl.to_string(), "CHTL");
        assert_eq!(FragmentType::ChtlJs.to_string(), "CHTL-JS");
    }

    #[test]
    fn fragment_construction() {
        let frag = CodeFragment::new(FragmentType::Css, "color: red;", Span::new(0, 20));
        assert_eq!(frag.kind, FragmentType::Css);
        assert_eq!(frag.content, "color: red;");
        assert_eq!(frag.span, Span::new(0, 20));
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(FragmentType::default(), FragmentType::Unknown);
    }
}
