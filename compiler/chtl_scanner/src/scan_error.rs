//! Scan-level errors.
//!
//! Errors follow the WHERE+WHAT+WHY shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` naming what the scanner was consuming at the time
//!
//! Every kind here is lexical and locally recovered — the scan always
//! completes with a best-effort fragment list, and the caller decides
//! whether to continue the pipeline. Fatal internal-consistency errors
//! live in the assembly layer ([`AssembleError`](crate::AssembleError)),
//! not here.

use chtl_diagnostic::{Diagnostic, ErrorCode, Severity};
use chtl_ir::Span;
use chtl_scanner_core::{EncodingIssue, EncodingIssueKind};

/// A recoverable scanner error with full context for rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScanError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: ScanErrorKind,
    /// WHY we were there (scanning context at the point of error).
    pub context: ScanContext,
}

/// What kind of scanner error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScanErrorKind {
    /// Missing closing delimiter for a block; the rest of the input was
    /// taken as the block body.
    UnterminatedBlock {
        /// The delimiter that was expected (`}` or `)`).
        delim: char,
    },
    /// Missing closing quote for a string literal.
    UnterminatedString { quote: char },
    /// Missing `*/` for a block comment.
    UnterminatedComment,
    /// UTF-8 byte order mark at the start of the file.
    Utf8Bom,
    /// UTF-16 byte order mark — the file is in the wrong encoding.
    Utf16Bom { big_endian: bool },
    /// Null byte inside the source content.
    InteriorNull,
}

/// Scanning context at the point of error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScanContext {
    /// Top-level CHTL text.
    #[default]
    TopLevel,
    /// Inside a `style { ... }` block.
    InStyleBlock,
    /// Inside a `script { ... }` block.
    InScriptBlock,
    /// Inside an `[Origin] @... { ... }` block.
    InOriginBlock,
    /// Inside a `{{ ... }}` enhanced selector.
    InSelector,
}

impl ScanContext {
    /// The construct being consumed, for messages.
    fn describe(self) -> &'static str {
        match self {
            ScanContext::TopLevel => "block",
            ScanContext::InStyleBlock => "style block",
            ScanContext::InScriptBlock => "script block",
            ScanContext::InOriginBlock => "origin block",
            ScanContext::InSelector => "enhanced selector",
        }
    }
}

impl ScanError {
    /// Convert an encoding issue from buffer construction.
    pub fn from_encoding_issue(issue: &EncodingIssue) -> Self {
        let kind = match issue.kind {
            EncodingIssueKind::Utf8Bom => ScanErrorKind::Utf8Bom,
            EncodingIssueKind::Utf16LeBom => ScanErrorKind::Utf16Bom { big_endian: false },
            EncodingIssueKind::Utf16BeBom => ScanErrorKind::Utf16Bom { big_endian: true },
            EncodingIssueKind::InteriorNull => ScanErrorKind::InteriorNull,
        };
        ScanError {
            span: Span::new(issue.pos, issue.pos + issue.len),
            kind,
            context: ScanContext::TopLevel,
        }
    }

    /// Diagnostic severity of this error.
    pub fn severity(&self) -> Severity {
        match self.kind {
            // The null byte stays in the output as content; worth flagging
            // but not worth failing the scan over.
            ScanErrorKind::InteriorNull => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// The diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ScanErrorKind::UnterminatedString { .. } => ErrorCode::S0001,
            ScanErrorKind::UnterminatedComment => ErrorCode::S0002,
            ScanErrorKind::UnterminatedBlock { .. } => ErrorCode::S0003,
            ScanErrorKind::Utf8Bom => ErrorCode::S0004,
            ScanErrorKind::Utf16Bom { .. } => ErrorCode::S0005,
            ScanErrorKind::InteriorNull => ErrorCode::S0006,
        }
    }

    /// The main message.
    pub fn message(&self) -> String {
        match self.kind {
            ScanErrorKind::UnterminatedBlock { .. } => {
                format!("unterminated {}", self.context.describe())
            }
            ScanErrorKind::UnterminatedString { quote } => {
                format!("unterminated string literal (missing closing {quote})")
            }
            ScanErrorKind::UnterminatedComment => "unterminated block comment".to_string(),
            ScanErrorKind::Utf8Bom => "UTF-8 byte order mark at start of file".to_string(),
            ScanErrorKind::Utf16Bom { big_endian } => {
                let endian = if big_endian { "big" } else { "little" };
                format!("UTF-16 {endian}-endian byte order mark; CHTL sources must be UTF-8")
            }
            ScanErrorKind::InteriorNull => "null byte in source content".to_string(),
        }
    }

    /// Render this error as a full diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let base = match self.severity() {
            Severity::Warning => Diagnostic::warning(self.code()),
            _ => Diagnostic::error(self.code()),
        };
        let diag = base
            .with_message(self.message())
            .with_label(self.span, self.label_message());
        match self.kind {
            ScanErrorKind::UnterminatedBlock { delim } => diag
                .with_note("the rest of the input was taken as the block body")
                .with_suggestion(format!("add a closing `{delim}`")),
            ScanErrorKind::UnterminatedString { quote } => {
                diag.with_suggestion(format!("add a closing `{quote}`"))
            }
            ScanErrorKind::UnterminatedComment => diag.with_suggestion("add a closing `*/`"),
            ScanErrorKind::Utf8Bom => diag.with_suggestion("save the file without a BOM"),
            ScanErrorKind::Utf16Bom { .. } => diag.with_suggestion("re-encode the file as UTF-8"),
            ScanErrorKind::InteriorNull => diag,
        }
    }

    fn label_message(&self) -> &'static str {
        match self.kind {
            ScanErrorKind::UnterminatedBlock { .. } => "opened here",
            ScanErrorKind::UnterminatedString { .. } => "string starts here",
            ScanErrorKind::UnterminatedComment => "comment starts here",
            ScanErrorKind::Utf8Bom | ScanErrorKind::Utf16Bom { .. } => "byte order mark",
            ScanErrorKind::InteriorNull => "null byte",
        }
    }
}
