//! Sentinel-terminated source buffer.
//!
//! The buffer keeps the source twice: as the original `String` (so slices
//! come back as `&str` without any unsafe re-validation) and as a byte
//! buffer with a `0x00` sentinel appended, padded with zeros to the next
//! 64-byte boundary. The sentinel lets the cursor detect EOF without
//! explicit bounds checks, and the padding makes `peek`/`peek2` safe at
//! any position.
//!
//! # Interior Null Bytes
//!
//! A null byte at `pos < source_len` is source content, not EOF; the
//! cursor distinguishes the two by comparing positions. Interior nulls
//! (along with BOMs) are recorded as [`EncodingIssue`] values at
//! construction so the scanner can report them with spans.

use crate::Cursor;

/// Padding granularity for the sentinel buffer.
const PAD: usize = 64;

/// Sentinel-terminated copy of one source file.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// The original source text, unmodified.
    text: String,
    /// `[source bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues found while building the buffer.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position of the problematic sequence.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at the start of the file.
    Utf8Bom,
    /// UTF-16 little-endian BOM at the start of the file.
    Utf16LeBom,
    /// UTF-16 big-endian BOM at the start of the file.
    Utf16BeBom,
    /// Null byte (U+0000) inside the source content.
    InteriorNull,
}

impl SourceBuffer {
    /// Build a buffer from source text.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`; callers
    /// reject files that large before scanning.
    pub fn new(source: impl Into<String>) -> Self {
        let text = source.into();
        let source_len = text.len();

        // Room for the sentinel plus two lookahead bytes (`peek2` reads
        // up to `source_len + 2`), rounded up to the padding boundary.
        let padded_len = (source_len + 3 + PAD - 1) & !(PAD - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(text.as_bytes());

        let mut encoding_issues = Vec::new();
        detect_bom(text.as_bytes(), &mut encoding_issues);
        detect_interior_nulls(text.as_bytes(), &mut encoding_issues);

        SourceBuffer {
            text,
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// The source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Whether the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text, &self.buf, self.source_len)
    }

    /// Encoding issues detected at construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect a byte order mark at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let kind = match source {
        [0xEF, 0xBB, 0xBF, ..] => Some((EncodingIssueKind::Utf8Bom, 3)),
        [0xFF, 0xFE, ..] => Some((EncodingIssueKind::Utf16LeBom, 2)),
        [0xFE, 0xFF, ..] => Some((EncodingIssueKind::Utf16BeBom, 2)),
        _ => None,
    };
    if let Some((kind, len)) = kind {
        issues.push(EncodingIssue { kind, pos: 0, len });
    }
}

/// Detect null bytes inside the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(found) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + found;
        if let Ok(pos) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}
