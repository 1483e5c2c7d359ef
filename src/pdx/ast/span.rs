//! Position and span tracking for source code locations
//!
//! This module defines the data structures for representing positions
//! and spans in source text. Both line and column are zero-based here;
//! user-facing messages add one.

use std::fmt;

/// Represents a position in source code (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Represents a span in source code (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Check if a position is contained within this span
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains() {
        let span = Span::new(Position::new(1, 4), Position::new(3, 0));
        assert!(span.contains(Position::new(1, 4)));
        assert!(span.contains(Position::new(2, 80)));
        assert!(span.contains(Position::new(3, 0)));
        assert!(!span.contains(Position::new(1, 3)));
        assert!(!span.contains(Position::new(3, 1)));
    }

    #[test]
    fn test_display() {
        let span = Span::new(Position::new(0, 2), Position::new(0, 7));
        assert_eq!(span.to_string(), "0:2..0:7");
    }
}
