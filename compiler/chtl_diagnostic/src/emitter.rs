//! Diagnostic emitters.
//!
//! The scanner and its callers produce [`Diagnostic`] values; an emitter
//! turns them into output. Only a terminal emitter lives here — the
//! scanner is an in-process transform, so machine-readable formats belong
//! to whichever front end embeds it.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Human-readable terminal emitter with optional ANSI colors.
///
/// Holds the source text so label offsets can be rendered as
/// line:column positions.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: &'src str,
    lines: LineOffsetTable,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create an emitter over `source`.
    pub fn new(writer: W, colors: bool, source: &'src str) -> Self {
        TerminalEmitter {
            writer,
            colors,
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    fn severity_color(&self, severity: Severity) -> &'static str {
        if !self.colors {
            return "";
        }
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        }
    }

    fn reset(&self) -> &'static str {
        if self.colors {
            colors::RESET
        } else {
            ""
        }
    }

    fn bold(&self) -> &'static str {
        if self.colors {
            colors::BOLD
        } else {
            ""
        }
    }

    fn write_diagnostic(&mut self, diag: &Diagnostic) -> io::Result<()> {
        let color = self.severity_color(diag.severity);
        let reset = self.reset();
        let bold = self.bold();
        writeln!(
            self.writer,
            "{color}{}[{}]{reset}{bold}: {}{reset}",
            diag.severity, diag.code, diag.message
        )?;
        for label in &diag.labels {
            let (line, col) = self.lines.offset_to_line_col(self.source, label.span.start);
            let marker = if label.is_primary { "-->" } else { "..." };
            writeln!(self.writer, "  {marker} {line}:{col}: {}", label.message)?;
        }
        for note in &diag.notes {
            writeln!(self.writer, "  = note: {note}")?;
        }
        for suggestion in &diag.suggestions {
            writeln!(self.writer, "  = help: {suggestion}")?;
        }
        Ok(())
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Output failures are not diagnosable through the same channel;
        // drop the report rather than panic mid-render.
        let _ = self.write_diagnostic(diagnostic);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }
        let _ = writeln!(
            self.writer,
            "{} error{}, {} warning{}",
            error_count,
            plural_s(error_count),
            warning_count,
            plural_s(warning_count)
        );
    }
}
