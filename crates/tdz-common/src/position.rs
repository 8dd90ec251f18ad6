//! Position utilities for line/column source locations.
//!
//! The AST records where each node starts as a line/column pair; the
//! checker orders references and declarations by comparing those pairs.
//! `LineMap` converts byte offsets (what a parser usually tracks) into
//! positions.

use serde::Serialize;

/// A position in a source file (0-indexed line and column).
///
/// Columns are counted in characters (Unicode scalar values). Any
/// monotonic unit works for ordering as long as every position in a file
/// comes from the same producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column
    pub column: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Textual source order: an earlier line wins; on the same line the
    /// column decides. Statement boundaries are not consulted.
    #[must_use]
    pub const fn is_before(self, other: Position) -> bool {
        if self.line != other.line {
            self.line < other.line
        } else {
            self.column < other.column
        }
    }
}

/// Line map for byte offset -> position conversion.
/// Stores the starting offset of each line.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Starting offset of each line (line_starts[0] is always 0)
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text.
    ///
    /// Recognizes `\n`, `\r\n`, and lone `\r` line endings.
    #[must_use]
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0u32];

        for i in memchr::memchr2_iter(b'\r', b'\n', bytes) {
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                // \r\n - the \n creates the line start
                continue;
            }
            line_starts.push((i + 1) as u32);
        }

        LineMap { line_starts }
    }

    /// Convert a byte offset to a position.
    #[must_use]
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let end = (offset as usize).min(source.len());
        let start = (line_start as usize).min(end);
        let column = source.get(start..end).map_or(0, |s| s.chars().count()) as u32;

        Position {
            line: line as u32,
            column,
        }
    }

    /// Get the number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the starting offset of a line.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<u32> {
        self.line_starts.get(line).copied()
    }
}
