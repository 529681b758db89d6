//! The fragment dispatcher — the Unified Scanner's single forward pass.
//!
//! The pass walks the source byte-by-byte, passing over string literals
//! and comments with the skippers so their content can never fire a
//! trigger. Untriggered text accrues to a pending CHTL span; each trigger
//! flushes the pending span as one `Chtl` fragment, brace-matches the
//! block body, and emits the block's fragment. One pass, O(n), no
//! backtracking beyond `Copy`-cursor probes at candidate trigger heads.
//!
//! Fragment spans tile the source: every byte of the input belongs to
//! exactly one fragment's span, in order, so the document can be
//! reassembled byte-for-byte.

use chtl_ir::{CodeFragment, FragmentType, PlaceholderMap, Span};
use chtl_scanner_core::{
    match_delimiter, skip_block_comment, skip_line_comment, skip_string, Cursor, DelimKind,
    MatchOutcome, SkipOutcome, SourceBuffer,
};
use tracing::{debug, trace};

use crate::scan_error::{ScanContext, ScanError, ScanErrorKind};
use crate::splicer::splice_script_body;
use crate::triggers::{
    block_trigger, is_ident_continue, is_ident_start, is_inter_token_whitespace, origin_trigger,
    Trigger,
};

/// The Unified Scanner over one immutable source string.
///
/// `scan()` consumes the scanner, so a single instance runs at most once;
/// fresh instances over the same source produce structurally identical
/// results. The scanner is fully synchronous and owns all of its state —
/// independent instances can run on independent threads with nothing
/// shared.
#[derive(Debug)]
pub struct Scanner {
    buffer: SourceBuffer,
}

/// Everything one scan produces.
///
/// Lexical errors do not abort the scan: `fragments` is always a
/// best-effort partition of the whole input, and the caller decides
/// whether `errors` should stop the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    /// The ordered fragment list; spans tile the source.
    pub fragments: Vec<CodeFragment>,
    /// Placeholder tokens allocated while splicing script bodies.
    pub placeholders: PlaceholderMap,
    /// Recoverable errors encountered during the pass.
    pub errors: Vec<ScanError>,
}

impl Scanner {
    /// Wrap a source string.
    pub fn new(source: impl Into<String>) -> Self {
        Scanner {
            buffer: SourceBuffer::new(source),
        }
    }

    /// Run the single forward pass.
    pub fn scan(self) -> ScanResult {
        let errors = self
            .buffer
            .encoding_issues()
            .iter()
            .map(ScanError::from_encoding_issue)
            .collect();
        let pass = ScanPass {
            cursor: self.buffer.cursor(),
            fragments: Vec::new(),
            placeholders: PlaceholderMap::new(),
            errors,
            pending_start: 0,
        };
        pass.run()
    }
}

/// Transient state of one pass. Never exposed.
struct ScanPass<'a> {
    cursor: Cursor<'a>,
    fragments: Vec<CodeFragment>,
    placeholders: PlaceholderMap,
    errors: Vec<ScanError>,
    /// Start of the pending (not yet flushed) CHTL span.
    pending_start: u32,
}

impl ScanPass<'_> {
    fn run(mut self) -> ScanResult {
        while !self.cursor.is_eof() {
            let b = self.cursor.current();
            match b {
                b'"' | b'\'' => {
                    let start = self.cursor.pos();
                    if skip_string(&mut self.cursor, b) == SkipOutcome::UnterminatedAtEof {
                        self.errors.push(ScanError {
                            span: Span::new(start, start + 1),
                            kind: ScanErrorKind::UnterminatedString { quote: b as char },
                            context: ScanContext::TopLevel,
                        });
                    }
                }
                b'/' if self.cursor.peek() == b'/' => skip_line_comment(&mut self.cursor),
                b'/' if self.cursor.peek() == b'*' => {
                    let start = self.cursor.pos();
                    if skip_block_comment(&mut self.cursor) == SkipOutcome::UnterminatedAtEof {
                        self.errors.push(ScanError {
                            span: Span::new(start, start + 2),
                            kind: ScanErrorKind::UnterminatedComment,
                            context: ScanContext::TopLevel,
                        });
                    }
                }
                b'[' => {
                    if !self.try_origin_trigger() {
                        self.cursor.advance();
                    }
                }
                _ if is_ident_start(b) && self.at_word_boundary() => {
                    self.word_or_trigger();
                }
                _ => self.cursor.advance(),
            }
        }

        // Final flush — even when empty, so a scan with n triggered
        // blocks always yields exactly 2n+1 fragments.
        self.flush_pending(self.cursor.source_len());

        debug!(
            fragments = self.fragments.len(),
            placeholders = self.placeholders.len(),
            errors = self.errors.len(),
            "scan complete"
        );
        ScanResult {
            fragments: self.fragments,
            placeholders: self.placeholders,
            errors: self.errors,
        }
    }

    /// Whether the previous byte cannot continue an identifier (so the
    /// current byte starts a word). Position 0 is a boundary.
    fn at_word_boundary(&self) -> bool {
        !is_ident_continue(self.cursor.byte_at(self.cursor.pos().wrapping_sub(1)))
    }

    /// Consume the identifier at the cursor. If it is a trigger word
    /// followed (modulo whitespace) by `{`, dispatch the block; otherwise
    /// the word stays pending CHTL text.
    fn word_or_trigger(&mut self) {
        let word_start = self.cursor.pos();
        let mut probe = self.cursor;
        probe.eat_while(is_ident_continue);
        let word = probe.slice_from(word_start);

        if let Some(trigger) = block_trigger(word) {
            let mut at_open = probe;
            at_open.eat_while(is_inter_token_whitespace);
            if at_open.current() == b'{' {
                let open = at_open.pos();
                at_open.advance();
                self.cursor = at_open;
                self.emit_block(trigger, word_start, open);
                return;
            }
        }
        // Not a trigger: skip the word whole so `stylesheet` is never
        // re-inspected at `tylesheet`.
        self.cursor = probe;
    }

    /// Try to match `[Origin] @JavaScript {` / `[Origin] @Style {` at the
    /// cursor. On a match the block is dispatched and the cursor moves
    /// past it; otherwise the cursor is untouched.
    fn try_origin_trigger(&mut self) -> bool {
        let start = self.cursor.pos();
        let mut probe = self.cursor;
        for &expected in b"[Origin]" {
            if probe.current() != expected {
                return false;
            }
            probe.advance();
        }
        probe.eat_while(is_inter_token_whitespace);
        if probe.current() != b'@' {
            return false;
        }
        probe.advance();
        let type_start = probe.pos();
        probe.eat_while(is_ident_continue);
        let Some(trigger) = origin_trigger(probe.slice_from(type_start)) else {
            return false;
        };
        probe.eat_while(is_inter_token_whitespace);
        if probe.current() != b'{' {
            return false;
        }
        let open = probe.pos();
        probe.advance();
        self.cursor = probe;
        self.emit_block(trigger, start, open);
        true
    }

    /// Flush the pending CHTL span `[pending_start, end)` as one `Chtl`
    /// fragment — even when empty, to keep fragment counts stable.
    fn flush_pending(&mut self, end: u32) {
        let span = Span::new(self.pending_start, end);
        let content = self.cursor.slice(span.start, span.end);
        trace!(span = %span, "CHTL fragment");
        self.fragments
            .push(CodeFragment::new(FragmentType::Chtl, content, span));
    }

    /// Dispatch one triggered block. The cursor sits just past the
    /// opening `{` at `open`; `trigger_start` is where the trigger's
    /// first byte (and thus the block fragment's span) begins.
    fn emit_block(&mut self, trigger: Trigger, trigger_start: u32, open: u32) {
        self.flush_pending(trigger_start);

        let body_start = self.cursor.pos();
        let (body_end, block_end) = match match_delimiter(&mut self.cursor, DelimKind::Brace) {
            MatchOutcome::Closed(close) => (close, close + 1),
            MatchOutcome::UnterminatedAtEof => {
                self.errors.push(ScanError {
                    span: Span::new(open, open + 1),
                    kind: ScanErrorKind::UnterminatedBlock { delim: '}' },
                    context: block_context(trigger),
                });
                (self.cursor.source_len(), self.cursor.source_len())
            }
        };

        let body = self.cursor.slice(body_start, body_end);
        let span = Span::new(trigger_start, block_end);
        let fragment = match trigger {
            Trigger::StyleBlock | Trigger::OriginStyle => {
                CodeFragment::new(FragmentType::Css, body, span)
            }
            Trigger::OriginJavaScript => CodeFragment::new(FragmentType::Js, body, span),
            Trigger::ScriptBlock => {
                let spliced =
                    splice_script_body(body, body_start, &mut self.placeholders, &mut self.errors);
                CodeFragment::new(FragmentType::ChtlJs, spliced, span)
            }
        };
        trace!(kind = %fragment.kind, span = %span, "block fragment");
        self.fragments.push(fragment);
        self.pending_start = self.cursor.pos();
    }
}

/// The scan context matching a trigger's block.
fn block_context(trigger: Trigger) -> ScanContext {
    match trigger {
        Trigger::StyleBlock => ScanContext::InStyleBlock,
        Trigger::ScriptBlock => ScanContext::InScriptBlock,
        Trigger::OriginJavaScript | Trigger::OriginStyle => ScanContext::InOriginBlock,
    }
}
