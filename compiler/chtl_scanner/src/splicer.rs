//! CHTL-JS sub-splicer.
//!
//! Takes the body of one `script { ... }` block and separates plain
//! JavaScript from CHTL-JS syntax. Plain-JS runs are elided into the
//! placeholder map and replaced by their tokens; CHTL-JS lexemes — the
//! `{{ ... }}` enhanced selector, the `->` arrow operator, and reserved
//! identifiers heading a block or argument list — are kept verbatim.
//!
//! Substituting every placeholder in the output with its mapped text
//! reconstructs the original body exactly; the CHTL-JS compiler relies on
//! this to splice the elided code back after transforming the constructs
//! around it.

use chtl_ir::{PlaceholderMap, Span};
use chtl_scanner_core::{
    match_delimiter, skip_block_comment, skip_line_comment, skip_string, Cursor, DelimKind,
    MatchOutcome, SkipOutcome, SourceBuffer,
};
use tracing::trace;

use crate::scan_error::{ScanContext, ScanError, ScanErrorKind};
use crate::triggers::{
    is_chtl_js_keyword, is_ident_continue, is_ident_start, is_inter_token_whitespace,
};

/// Splice one script-block body.
///
/// `base_offset` is the body's byte offset in the enclosing source, so
/// error spans land in file coordinates. Placeholder numbering continues
/// across script blocks of the same scan because the map is shared.
///
/// A body with zero CHTL-JS lexemes (the empty body included) yields
/// exactly one placeholder covering the whole body, so downstream code
/// never needs a "no CHTL-JS used" special case.
pub(crate) fn splice_script_body(
    body: &str,
    base_offset: u32,
    placeholders: &mut PlaceholderMap,
    errors: &mut Vec<ScanError>,
) -> String {
    let buffer = SourceBuffer::new(body);
    let mut cursor = buffer.cursor();
    let mut out = String::new();
    let mut plain_start = 0u32;
    let mut spliced_any = false;

    while !cursor.is_eof() {
        let b = cursor.current();
        match b {
            b'"' | b'\'' | b'`' => {
                let start = cursor.pos();
                if skip_string(&mut cursor, b) == SkipOutcome::UnterminatedAtEof {
                    errors.push(ScanError {
                        span: Span::new(base_offset + start, base_offset + start + 1),
                        kind: ScanErrorKind::UnterminatedString { quote: b as char },
                        context: ScanContext::InScriptBlock,
                    });
                }
            }
            b'/' if cursor.peek() == b'/' => skip_line_comment(&mut cursor),
            b'/' if cursor.peek() == b'*' => {
                let start = cursor.pos();
                if skip_block_comment(&mut cursor) == SkipOutcome::UnterminatedAtEof {
                    errors.push(ScanError {
                        span: Span::new(base_offset + start, base_offset + start + 2),
                        kind: ScanErrorKind::UnterminatedComment,
                        context: ScanContext::InScriptBlock,
                    });
                }
            }
            b'{' if cursor.peek() == b'{' => {
                let lexeme_start = cursor.pos();
                flush_plain(&mut out, body, plain_start, lexeme_start, placeholders);
                consume_enhanced_selector(&mut cursor, base_offset, errors);
                out.push_str(cursor.slice(lexeme_start, cursor.pos()));
                plain_start = cursor.pos();
                spliced_any = true;
            }
            b'-' if cursor.peek() == b'>' => {
                flush_plain(&mut out, body, plain_start, cursor.pos(), placeholders);
                out.push_str("->");
                cursor.advance_n(2);
                plain_start = cursor.pos();
                spliced_any = true;
            }
            _ if is_ident_start(b) && at_word_boundary(&cursor) => {
                let word_start = cursor.pos();
                let mut probe = cursor;
                probe.eat_while(is_ident_continue);
                let word = probe.slice_from(word_start);
                if is_chtl_js_keyword(word) {
                    if let Some(after) = consume_keyword_block(probe, base_offset, errors) {
                        flush_plain(&mut out, body, plain_start, word_start, placeholders);
                        out.push_str(after.slice(word_start, after.pos()));
                        cursor = after;
                        plain_start = cursor.pos();
                        spliced_any = true;
                        continue;
                    }
                }
                // Plain identifier (or a reserved word used as one):
                // skip it whole so its tail is never re-inspected.
                cursor = probe;
            }
            _ => cursor.advance(),
        }
    }

    if !spliced_any {
        // Zero CHTL-JS lexemes: one placeholder covering the whole body.
        return placeholders.create(body);
    }
    flush_plain(&mut out, body, plain_start, cursor.pos(), placeholders);
    out
}

/// Flush the plain-JS run `[start, end)` into the map and append its
/// token. Empty runs produce no placeholder.
fn flush_plain(
    out: &mut String,
    body: &str,
    start: u32,
    end: u32,
    placeholders: &mut PlaceholderMap,
) {
    if start < end {
        let token = placeholders.create(&body[start as usize..end as usize]);
        trace!(token = %token, len = end - start, "elided plain JS");
        out.push_str(&token);
    }
}

/// Whether the cursor sits at the start of a word (the previous byte
/// cannot continue an identifier). Position 0 counts as a boundary.
fn at_word_boundary(cursor: &Cursor<'_>) -> bool {
    !is_ident_continue(cursor.byte_at(cursor.pos().wrapping_sub(1)))
}

/// Consume a `{{ ... }}` enhanced selector, nesting-aware.
///
/// The cursor sits on the first `{`; on return it sits just past the
/// matching `}}` (or at EOF for an unterminated selector, which is
/// reported and recovered by taking the rest of the body).
fn consume_enhanced_selector(
    cursor: &mut Cursor<'_>,
    base_offset: u32,
    errors: &mut Vec<ScanError>,
) {
    let open = cursor.pos();
    cursor.advance_n(2);
    let mut depth = 2u32;
    while !cursor.is_eof() {
        match cursor.current() {
            quote @ (b'"' | b'\'') => {
                // Attribute selectors like {{input[type="text"]}} may
                // quote values; braces inside them must not count.
                let _ = skip_string(cursor, quote);
            }
            b'{' => {
                depth += 1;
                cursor.advance();
            }
            b'}' => {
                depth -= 1;
                cursor.advance();
                if depth == 0 {
                    return;
                }
            }
            _ => cursor.advance(),
        }
    }
    errors.push(ScanError {
        span: Span::new(base_offset + open, base_offset + open + 2),
        kind: ScanErrorKind::UnterminatedBlock { delim: '}' },
        context: ScanContext::InSelector,
    });
}

/// Try to consume the block or argument list following a reserved word.
///
/// `probe` sits just past the word. Returns the cursor past the matched
/// `}` / `)` when the word heads a block, `None` when it is an ordinary
/// identifier (no `{` or `(` follows).
fn consume_keyword_block<'a>(
    mut probe: Cursor<'a>,
    base_offset: u32,
    errors: &mut Vec<ScanError>,
) -> Option<Cursor<'a>> {
    probe.eat_while(is_inter_token_whitespace);
    let kind = match probe.current() {
        b'{' => DelimKind::Brace,
        b'(' => DelimKind::Paren,
        _ => return None,
    };
    let open = probe.pos();
    probe.advance();
    if match_delimiter(&mut probe, kind) == MatchOutcome::UnterminatedAtEof {
        errors.push(ScanError {
            span: Span::new(base_offset + open, base_offset + open + 1),
            kind: ScanErrorKind::UnterminatedBlock {
                delim: kind.close() as char,
            },
            context: ScanContext::InScriptBlock,
        });
    }
    Some(probe)
}

#[cfg(test)]
mod tests;
