use std::fmt;

/// Error codes for all scanner diagnostics.
///
/// Format: S#### where the first digit indicates the class:
/// - S0xxx: lexical errors, locally recovered
/// - S9xxx: internal-consistency errors, always fatal
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical errors (S0xxx)
    /// Unterminated string literal
    S0001,
    /// Unterminated block comment
    S0002,
    /// Unterminated block (missing closing delimiter)
    S0003,
    /// UTF-8 byte order mark at start of file
    S0004,
    /// UTF-16 byte order mark (wrong encoding)
    S0005,
    /// Null byte in source content
    S0006,

    // Internal-consistency errors (S9xxx)
    /// Unknown placeholder token during assembly
    S9001,
    /// Fragment list does not cover the source contiguously
    S9002,
}

impl ErrorCode {
    /// The code as a string, e.g. `"S0003"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::S0001 => "S0001",
            ErrorCode::S0002 => "S0002",
            ErrorCode::S0003 => "S0003",
            ErrorCode::S0004 => "S0004",
            ErrorCode::S0005 => "S0005",
            ErrorCode::S0006 => "S0006",
            ErrorCode::S9001 => "S9001",
            ErrorCode::S9002 => "S9002",
        }
    }

    /// Whether this code marks an internal-consistency error — a bug in
    /// the scanner or a downstream consumer, never a user error.
    pub fn is_internal(self) -> bool {
        matches!(self, ErrorCode::S9001 | ErrorCode::S9002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
