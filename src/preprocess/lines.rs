//! Line splitting and classification for short-form VexTab
//!
//! Classifies each source line by what it means to the rewriting pass:
//! blank lines, comments, document preamble (title/subtitle/sidenote and
//! the global options directive), explicit stave openers, bare stave
//! option sequences, and ordinary notation content.

use serde::{Deserialize, Serialize};

/// File extension of the short-form dialect
pub const SHORT_TAB_EXTENSION: &str = ".tab";

/// What a source line means to the rewriting pass
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// `//` or `#` comment
    Comment,
    /// `title`, `subtitle`, or `sidenote` directive
    Header,
    /// `options` directive
    Options,
    /// Explicit `tabstave` line
    StaveOpen,
    /// Bare `key=value ...` sequence that belongs on a `tabstave` line
    StaveOptions,
    /// Anything else (notes, text, unrecognized input)
    Content,
}

impl LineKind {
    /// Preamble lines stay above any stave the rewrite opens
    pub fn is_preamble(&self) -> bool {
        matches!(self, LineKind::Header | LineKind::Options)
    }
}

/// Split source text into lines, accepting both LF and CRLF endings.
///
/// Empty input yields a single empty line, and a trailing newline yields a
/// trailing empty line, matching how the host editor counts lines.
pub fn split_lines(source: &str) -> Vec<&str> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Length in bytes of the leading whitespace of a line
pub fn leading_whitespace_len(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Classify a line by its content after leading whitespace
pub fn classify_line(line: &str) -> LineKind {
    let trimmed_start = line.trim_start();

    if trimmed_start.trim_end().is_empty() {
        return LineKind::Blank;
    }
    if is_comment(trimmed_start) {
        return LineKind::Comment;
    }
    if is_header(trimmed_start) {
        return LineKind::Header;
    }
    if starts_with_keyword(trimmed_start, "options") {
        return LineKind::Options;
    }
    if starts_with_keyword(trimmed_start, "tabstave") {
        return LineKind::StaveOpen;
    }
    if is_stave_options(trimmed_start) {
        return LineKind::StaveOptions;
    }

    LineKind::Content
}

/// Check whether the file name marks a short-form (.tab) file.
///
/// The check is case-insensitive; a missing or empty file name never gates
/// the rewrite open.
pub fn is_short_tab_file(file_name: Option<&str>) -> bool {
    match file_name {
        Some(name) => name.to_lowercase().ends_with(SHORT_TAB_EXTENSION),
        None => false,
    }
}

/// Check whether the file name is any VexTab document the preview handles
/// (.vt, .vextab, or short-form .tab).
pub fn is_vextab_file(file_name: Option<&str>) -> bool {
    match file_name {
        Some(name) => {
            let name = name.to_lowercase();
            name.ends_with(".vt") || name.ends_with(".vextab") || name.ends_with(".tab")
        }
        None => false,
    }
}

fn is_comment(trimmed_start: &str) -> bool {
    trimmed_start.starts_with("//") || trimmed_start.starts_with('#')
}

fn is_header(trimmed_start: &str) -> bool {
    starts_with_keyword(trimmed_start, "title")
        || starts_with_keyword(trimmed_start, "subtitle")
        || starts_with_keyword(trimmed_start, "sidenote")
}

/// Check for a directive keyword at a word boundary, so `titlefoo` is not
/// a `title` directive but `title=x` still is.
fn starts_with_keyword(trimmed_start: &str, keyword: &str) -> bool {
    match trimmed_start.strip_prefix(keyword) {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    }
}

/// Check for a `key=value ...` sequence, e.g. `notation=true time=12/8`.
///
/// The key must start with a letter and may contain letters, digits, `_`
/// and `-`, optionally followed by whitespace before the `=`. The dedicated
/// `tuning=` directive is excluded: VexTab parses it as its own statement,
/// so it must not be folded onto a `tabstave` line.
fn is_stave_options(trimmed_start: &str) -> bool {
    if trimmed_start.starts_with("tuning=") {
        return false;
    }
    looks_like_key_value(trimmed_start)
}

fn looks_like_key_value(trimmed_start: &str) -> bool {
    let mut chars = trimmed_start.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    let rest = chars.as_str();
    let rest = rest.trim_start_matches(|c: char| {
        c.is_ascii_alphanumeric() || c == '_' || c == '-'
    });
    rest.trim_start().starts_with('=')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_handles_crlf() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_classify_comments() {
        assert_eq!(classify_line("// a comment"), LineKind::Comment);
        assert_eq!(classify_line("  # indented"), LineKind::Comment);
    }

    #[test]
    fn test_classify_headers() {
        assert_eq!(classify_line("title My Song"), LineKind::Header);
        assert_eq!(classify_line("subtitle Part 1"), LineKind::Header);
        assert_eq!(classify_line("sidenote Left note"), LineKind::Header);
        // '=' is a word boundary, so this stays a header directive
        assert_eq!(classify_line("title=x"), LineKind::Header);
        // no word boundary, not a directive
        assert_eq!(classify_line("titlefoo"), LineKind::Content);
    }

    #[test]
    fn test_classify_options_directive() {
        assert_eq!(classify_line("options space=20"), LineKind::Options);
    }

    #[test]
    fn test_classify_stave_open() {
        assert_eq!(classify_line("tabstave"), LineKind::StaveOpen);
        assert_eq!(classify_line("tabstave notation=true"), LineKind::StaveOpen);
        assert_eq!(classify_line("tabstaves"), LineKind::Content);
    }

    #[test]
    fn test_classify_stave_options() {
        assert_eq!(
            classify_line("notation=true tablature=true time=12/8"),
            LineKind::StaveOptions
        );
        assert_eq!(classify_line("key = C"), LineKind::StaveOptions);
        assert_eq!(classify_line("  time=4/4"), LineKind::StaveOptions);
    }

    #[test]
    fn test_tuning_directive_is_not_stave_options() {
        assert_eq!(classify_line("tuning=E/5,C/5"), LineKind::Content);
        // only the literal prefix form is excluded
        assert_eq!(classify_line("tuning =E/5"), LineKind::StaveOptions);
    }

    #[test]
    fn test_classify_content() {
        assert_eq!(classify_line("notes :8 5/6"), LineKind::Content);
        assert_eq!(classify_line("text :w, |#segno"), LineKind::Content);
        assert_eq!(classify_line("=odd"), LineKind::Content);
    }

    #[test]
    fn test_short_tab_gate() {
        assert!(is_short_tab_file(Some("song.tab")));
        assert!(is_short_tab_file(Some("SONG.TAB")));
        assert!(!is_short_tab_file(Some("song.vt")));
        assert!(!is_short_tab_file(Some("song.vextab")));
        assert!(!is_short_tab_file(Some("")));
        assert!(!is_short_tab_file(None));
    }

    #[test]
    fn test_vextab_file_check() {
        assert!(is_vextab_file(Some("song.vt")));
        assert!(is_vextab_file(Some("song.vextab")));
        assert!(is_vextab_file(Some("song.tab")));
        assert!(!is_vextab_file(Some("song.txt")));
        assert!(!is_vextab_file(None));
    }

    #[test]
    fn test_preamble_kinds() {
        assert!(LineKind::Header.is_preamble());
        assert!(LineKind::Options.is_preamble());
        assert!(!LineKind::StaveOpen.is_preamble());
        assert!(!LineKind::Blank.is_preamble());
    }
}
