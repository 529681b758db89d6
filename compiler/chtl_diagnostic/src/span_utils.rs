//! Span utility functions for diagnostic rendering.
//!
//! The scanner reports byte offsets; humans read line and column numbers.
//! [`LineOffsetTable`] pre-computes the byte offset of every line start so
//! that offset → line/column lookups are O(log L) instead of rescanning
//! the source per diagnostic.

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use chtl_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "div {\n  style { }\n}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 8), (2, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build the table in one O(n) pass over the source.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                // The next line starts just past the newline.
                if let Ok(offset) = u32::try_from(i + 1) {
                    offsets.push(offset);
                }
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        // Largest line start <= offset.
        let line_idx = self.offsets.partition_point(|&start| start <= offset);
        u32::try_from(line_idx).unwrap_or(u32::MAX)
    }

    /// 1-based (line, column) for `offset`. The column counts characters,
    /// not bytes, from the line start.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get(line as usize - 1)
            .copied()
            .unwrap_or(0) as usize;
        let upto = (offset as usize).min(source.len());
        let col_chars = source
            .get(line_start..upto)
            .map_or(0, |prefix| prefix.chars().count());
        let col = u32::try_from(col_chars).unwrap_or(u32::MAX - 1) + 1;
        (line, col)
    }

    /// Byte offset of the start of a 1-based line, if it exists.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get(line as usize - 1).copied()
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_source() {
        let source = "div { }";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_count(), 1);
        assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
        assert_eq!(table.offset_to_line_col(source, 6), (1, 7));
    }

    #[test]
    fn multi_line_lookup() {
        let source = "line1\nline2\nline3";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_count(), 3);
        assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
        assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
        assert_eq!(table.offset_to_line_col(source, 12), (3, 1));
        assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
    }

    #[test]
    fn offset_at_newline_belongs_to_its_line() {
        let source = "ab\ncd";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
        assert_eq!(table.offset_to_line_col(source, 3), (2, 1));
    }

    #[test]
    fn empty_source_has_one_line() {
        let table = LineOffsetTable::build("");
        assert_eq!(table.line_count(), 1);
        assert_eq!(table.offset_to_line_col("", 0), (1, 1));
    }

    #[test]
    fn trailing_newline_opens_a_line() {
        let source = "ab\n";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_count(), 2);
        assert_eq!(table.offset_to_line_col(source, 3), (2, 1));
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let source = "\u{1F600}x";
        let table = LineOffsetTable::build(source);
        // The emoji is 4 bytes but 1 character; 'x' sits at column 2.
        assert_eq!(table.offset_to_line_col(source, 4), (1, 2));
    }

    #[test]
    fn line_start_offsets() {
        let table = LineOffsetTable::build("a\nbb\nccc");
        assert_eq!(table.line_start_offset(1), Some(0));
        assert_eq!(table.line_start_offset(2), Some(2));
        assert_eq!(table.line_start_offset(3), Some(5));
        assert_eq!(table.line_start_offset(4), None);
        assert_eq!(table.line_start_offset(0), None);
    }

    #[test]
    fn offset_past_end_clamps() {
        let source = "ab";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 99), (1, 3));
    }
}
