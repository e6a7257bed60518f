//! Caret locations for cursor mapping
//!
//! Pure text positions with no musical knowledge.

use serde::{Deserialize, Serialize};

/// A caret position reported by the preview host.
///
/// Lines are 1-indexed (the first line is line 1) and columns are 0-indexed,
/// matching the coordinates the editor host sends with every cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CursorLocation {
    pub line: usize,
    pub column: usize,
}

impl CursorLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Create a location at the start of a line
    pub fn line_start(line: usize) -> Self {
        Self { line, column: 0 }
    }

    /// The 0-indexed row this location refers to, or `None` for line 0
    /// (line numbers below 1 do not address any input row).
    pub fn row(&self) -> Option<usize> {
        self.line.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_is_zero_indexed() {
        assert_eq!(CursorLocation::new(1, 0).row(), Some(0));
        assert_eq!(CursorLocation::new(4, 7).row(), Some(3));
    }

    #[test]
    fn test_row_rejects_line_zero() {
        assert_eq!(CursorLocation::new(0, 5).row(), None);
    }

    #[test]
    fn test_line_start() {
        let loc = CursorLocation::line_start(3);
        assert_eq!(loc, CursorLocation::new(3, 0));
    }
}
