//! Position map between original and rewritten source
//!
//! The rewriting pass inserts lines (implicit `tabstave` openers) and
//! prefixes text onto option lines, so every cursor the host reports
//! against the original buffer has to be translated before the renderer
//! can highlight the right element. The map records, for every input
//! line, the output line it ended up on and how many characters were
//! inserted in front of its content.

use serde::{Deserialize, Serialize};

use crate::text::cursor::CursorLocation;

/// Per-line translation table built during one preprocessing pass.
///
/// Serializable so the JS host can hold onto it between renders and hand
/// it back with each cursor move.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SourceMap {
    /// 1-indexed output line for each 0-indexed input line
    output_lines: Vec<usize>,
    /// Characters inserted before the original content of each input line
    column_deltas: Vec<usize>,
}

impl SourceMap {
    /// Map for the non-rewritten path: every cursor maps to itself.
    pub fn identity() -> Self {
        Self {
            output_lines: Vec::new(),
            column_deltas: Vec::new(),
        }
    }

    /// Builder for a map covering `line_count` input lines.
    ///
    /// Entries start as (0, 0) placeholders; the rewriting pass records
    /// every input line exactly once.
    pub fn with_line_count(line_count: usize) -> Self {
        Self {
            output_lines: vec![0; line_count],
            column_deltas: vec![0; line_count],
        }
    }

    /// Record the output line (1-indexed) an input line was rewritten to.
    pub fn record_line(&mut self, input_row: usize, output_line: usize) {
        self.output_lines[input_row] = output_line;
    }

    /// Record the number of characters inserted before an input line's content.
    pub fn record_column_delta(&mut self, input_row: usize, delta: usize) {
        self.column_deltas[input_row] = delta;
    }

    /// Number of input lines this map covers
    pub fn line_count(&self) -> usize {
        self.output_lines.len()
    }

    /// Translate a cursor in the original source to the rewritten source.
    ///
    /// Out-of-range lines (line 0, or past the end of the input) come back
    /// unchanged. The identity map leaves every cursor unchanged.
    pub fn map_cursor(&self, cursor: CursorLocation) -> CursorLocation {
        let row = match cursor.row() {
            Some(row) if row < self.output_lines.len() => row,
            _ => return cursor,
        };
        CursorLocation {
            line: self.output_lines[row],
            column: cursor.column + self.column_deltas[row],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_map_echoes_cursors() {
        let map = SourceMap::identity();
        let cursor = CursorLocation::new(12, 34);
        assert_eq!(map.map_cursor(cursor), cursor);
    }

    #[test]
    fn test_maps_line_and_column_delta() {
        let mut map = SourceMap::with_line_count(2);
        map.record_line(0, 1);
        map.record_column_delta(0, 9);
        map.record_line(1, 2);

        assert_eq!(
            map.map_cursor(CursorLocation::new(1, 0)),
            CursorLocation::new(1, 9)
        );
        assert_eq!(
            map.map_cursor(CursorLocation::new(2, 3)),
            CursorLocation::new(2, 3)
        );
    }

    #[test]
    fn test_out_of_range_cursor_is_unchanged() {
        let mut map = SourceMap::with_line_count(1);
        map.record_line(0, 2);

        // line 0 addresses no input row
        assert_eq!(
            map.map_cursor(CursorLocation::new(0, 4)),
            CursorLocation::new(0, 4)
        );
        // past the end of the input
        assert_eq!(
            map.map_cursor(CursorLocation::new(5, 0)),
            CursorLocation::new(5, 0)
        );
    }

    #[test]
    fn test_map_survives_serde_round_trip() {
        let mut map = SourceMap::with_line_count(2);
        map.record_line(0, 2);
        map.record_line(1, 3);
        map.record_column_delta(1, 9);

        let json = serde_json::to_string(&map).expect("map should serialize");
        let restored: SourceMap = serde_json::from_str(&json).expect("map should deserialize");
        assert_eq!(restored, map);
        assert_eq!(
            restored.map_cursor(CursorLocation::new(2, 1)),
            CursorLocation::new(3, 10)
        );
    }
}
