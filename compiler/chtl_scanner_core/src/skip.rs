//! Lexical skippers.
//!
//! Each function consumes exactly one construct — a string literal, a line
//! comment, or a block comment — and advances the cursor past it. They
//! never look at the consumed text: their sole job is to make everything
//! downstream comment/string-blind, so a trigger keyword inside `"..."` or
//! `/* ... */` can never fire.
//!
//! Unterminated constructs are not fatal: the skipper consumes to end of
//! input and reports [`SkipOutcome::UnterminatedAtEof`]; the caller
//! decides whether that deserves a diagnostic.

use crate::Cursor;

/// How a skip ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipOutcome {
    /// The construct's closing delimiter was found and consumed.
    Terminated,
    /// End of input reached before the closing delimiter.
    UnterminatedAtEof,
}

/// Consume a string literal from its opening quote to the matching
/// unescaped closing quote.
///
/// The cursor must sit on the opening quote (`"`, `'`, or `` ` ``); on
/// return it sits just past the closing quote, or at EOF when the string
/// is unterminated. Backslash escapes are honored: `\"` does not close a
/// double-quoted string, and the escaped character is skipped whole so a
/// multi-byte escape cannot be re-inspected.
pub fn skip_string(cursor: &mut Cursor<'_>, quote: u8) -> SkipOutcome {
    debug_assert_eq!(cursor.current(), quote);
    cursor.advance(); // opening quote
    loop {
        match cursor.skip_to_either(quote, b'\\') {
            0 => return SkipOutcome::UnterminatedAtEof,
            b'\\' => {
                cursor.advance(); // backslash
                if cursor.is_eof() {
                    return SkipOutcome::UnterminatedAtEof;
                }
                cursor.advance_char(); // escaped character
            }
            _ => {
                cursor.advance(); // closing quote
                return SkipOutcome::Terminated;
            }
        }
    }
}

/// Consume a `//` line comment up to (not including) the newline.
///
/// The cursor must sit on the first `/` with `//` ahead. Reaching EOF
/// without a newline is normal, not an error: a line comment is closed by
/// the end of its line, and the last line needs no newline.
pub fn skip_line_comment(cursor: &mut Cursor<'_>) {
    debug_assert_eq!(cursor.current(), b'/');
    debug_assert_eq!(cursor.peek(), b'/');
    cursor.advance_n(2);
    cursor.eat_until_newline_or_eof();
}

/// Consume a `/* ... */` block comment including its close sequence.
///
/// The cursor must sit on the `/` with `/*` ahead. Nesting is not
/// supported (matching CSS and JavaScript); the first `*/` closes the
/// comment.
pub fn skip_block_comment(cursor: &mut Cursor<'_>) -> SkipOutcome {
    debug_assert_eq!(cursor.current(), b'/');
    debug_assert_eq!(cursor.peek(), b'*');
    cursor.advance_n(2);
    loop {
        if cursor.skip_to_byte(b'*') == 0 {
            return SkipOutcome::UnterminatedAtEof;
        }
        cursor.advance(); // the '*'
        if cursor.current() == b'/' {
            cursor.advance();
            return SkipOutcome::Terminated;
        }
    }
}
