//! Short-form VexTab preprocessor
//!
//! Short-form (.tab) files leave out the `tabstave` boilerplate that the
//! VexTab grammar requires: bare option sequences stand in for
//! `tabstave ...` lines, blank lines separate staves, and notation can
//! start without any stave opener at all. This module rewrites such a
//! file into explicit VexTab and builds the [`map::SourceMap`] that keeps
//! cursor highlighting correct against the rewritten text.
//!
//! The pass is total: it never fails, performs no I/O, and keeps all
//! state local to one call. Unrecognized input is passed through as
//! ordinary content (best-effort normalization, not validation).

pub mod lines;
pub mod map;

// Re-export commonly used types
pub use lines::{classify_line, is_short_tab_file, is_vextab_file, split_lines, LineKind};
pub use map::SourceMap;

/// The explicit stave opener keyword
pub const TABSTAVE_KEYWORD: &str = "tabstave";

/// Prefix inserted before bare option sequences (keyword + one space)
pub const TABSTAVE_PREFIX: &str = "tabstave ";

/// Rewritten text plus the cursor translation table for one source buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreprocessResult {
    /// The text the renderer consumes
    pub text: String,
    /// Translates original-buffer cursors into `text` coordinates
    pub map: SourceMap,
}

/// Rewrite short-form VexTab source into the explicit grammar.
///
/// The rewrite only applies when `file_name` marks a short-form file
/// (case-insensitive `.tab`); otherwise the text comes back unchanged
/// with an identity map. Line endings normalize to LF on the rewritten
/// path, as the renderer expects.
pub fn preprocess(source: &str, file_name: Option<&str>) -> PreprocessResult {
    if !is_short_tab_file(file_name) {
        return PreprocessResult {
            text: source.to_string(),
            map: SourceMap::identity(),
        };
    }

    let original = split_lines(source);
    let mut output: Vec<String> = Vec::with_capacity(original.len());
    let mut map = SourceMap::with_line_count(original.len());
    let mut opened = false;

    for (row, &line) in original.iter().enumerate() {
        match classify_line(line) {
            LineKind::Blank => {
                // Once a stave is open, a blank line starts the next stave.
                // Before that, open here only if the lookahead says no
                // preamble is still coming.
                if opened || should_open_at_blank(&original, row) {
                    output.push(TABSTAVE_KEYWORD.to_string());
                    opened = true;
                } else {
                    output.push(String::new());
                }
            }
            LineKind::Comment | LineKind::Header | LineKind::Options => {
                output.push(line.to_string());
            }
            LineKind::StaveOpen => {
                opened = true;
                output.push(line.to_string());
            }
            LineKind::StaveOptions => {
                opened = true;
                let indent = &line[..lines::leading_whitespace_len(line)];
                output.push(format!("{}{}{}", indent, TABSTAVE_PREFIX, line.trim_start()));
                map.record_column_delta(row, TABSTAVE_PREFIX.len());
            }
            LineKind::Content => {
                if !opened {
                    output.push(TABSTAVE_KEYWORD.to_string());
                    opened = true;
                }
                output.push(line.to_string());
            }
        }
        // Each input line maps to the last output line emitted for it.
        map.record_line(row, output.len());
    }

    PreprocessResult {
        text: output.join("\n"),
        map,
    }
}

/// Decide whether a blank line should itself open a stave.
///
/// Looks forward past further blank and comment lines. Preamble ahead
/// means the blank must stay blank (the preamble has to land outside any
/// stave); any other meaningful line, or end of input, opens here. Pure
/// function of the remaining lines, re-evaluated per blank line.
fn should_open_at_blank(original: &[&str], row: usize) -> bool {
    for &line in &original[row + 1..] {
        match classify_line(line) {
            LineKind::Blank | LineKind::Comment => continue,
            kind => return !kind.is_preamble(),
        }
    }
    true
}
