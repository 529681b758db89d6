//! Nesting-aware delimiter matching.
//!
//! Given a cursor positioned just past an opening delimiter, find the
//! matching close at the same nesting depth. String literals and comments
//! are passed over via the skippers, so a `}` inside `"..."` or
//! `/* ... */` never closes a block.

use crate::skip::{skip_block_comment, skip_line_comment, skip_string};
use crate::Cursor;

/// Delimiter pair to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelimKind {
    /// `{` / `}` — style, script, and Origin block bodies.
    Brace,
    /// `(` / `)` — CHTL-JS argument lists.
    Paren,
}

impl DelimKind {
    /// The opening byte.
    pub fn open(self) -> u8 {
        match self {
            DelimKind::Brace => b'{',
            DelimKind::Paren => b'(',
        }
    }

    /// The closing byte.
    pub fn close(self) -> u8 {
        match self {
            DelimKind::Brace => b'}',
            DelimKind::Paren => b')',
        }
    }
}

/// How a delimiter match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Matching close found; carries its byte offset. The cursor sits just
    /// past the close.
    Closed(u32),
    /// End of input before the matching close. The cursor sits at EOF and
    /// the remainder of the input is the block body.
    UnterminatedAtEof,
}

/// Find the close matching an already-consumed open delimiter.
///
/// The cursor must sit just past the opening byte of `kind`; the depth
/// counter starts at 1. Every string quote and comment opener met on the
/// way delegates to the corresponding skipper before scanning resumes, and
/// nested opens of the same kind increment the depth, so arbitrarily
/// nested blocks balance correctly.
pub fn match_delimiter(cursor: &mut Cursor<'_>, kind: DelimKind) -> MatchOutcome {
    let (open, close) = (kind.open(), kind.close());
    let mut depth = 1u32;
    while !cursor.is_eof() {
        let b = cursor.current();
        if b == open {
            depth += 1;
            cursor.advance();
        } else if b == close {
            depth -= 1;
            let at = cursor.pos();
            cursor.advance();
            if depth == 0 {
                return MatchOutcome::Closed(at);
            }
        } else {
            match b {
                b'"' | b'\'' | b'`' => {
                    // Outcome deliberately ignored: an unterminated string
                    // surfaces as an unterminated block once EOF is hit.
                    let _ = skip_string(cursor, b);
                }
                b'/' if cursor.peek() == b'/' => skip_line_comment(cursor),
                b'/' if cursor.peek() == b'*' => {
                    let _ = skip_block_comment(cursor);
                }
                _ => cursor.advance(),
            }
        }
    }
    MatchOutcome::UnterminatedAtEof
}
