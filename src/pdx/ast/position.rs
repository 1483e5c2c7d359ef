//! Source location utilities for converting byte offsets to line/column positions
//!
//! Used for error reporting: the lexer and the grammar work on byte ranges,
//! [`SourceLocation`] maps them back to lines and columns.

use super::span::{Position, Span};
use std::ops::Range;

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation<'s> {
    source: &'s str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'s> SourceLocation<'s> {
    /// Create a new SourceLocation from source code
    pub fn new(source: &'s str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a line/column position
    ///
    /// Offsets past the end clamp to the end of the source. Columns count
    /// characters, not bytes.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let offset = self.clamp(byte_offset);
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        let column = self.source[self.line_starts[line]..offset].chars().count();

        Position::new(line, column)
    }

    /// Convert a byte range to a span
    pub fn range_to_span(&self, range: &Range<usize>) -> Span {
        Span::new(
            self.byte_to_position(range.start),
            self.byte_to_position(range.end),
        )
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a zero-based line, without its line terminator
    pub fn line_text(&self, line: usize) -> Option<&'s str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        Some(self.source[start..end].trim_end_matches('\r'))
    }

    fn clamp(&self, byte_offset: usize) -> usize {
        let mut offset = byte_offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}
