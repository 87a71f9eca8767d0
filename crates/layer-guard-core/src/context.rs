//! Context types for rule execution.

use std::path::Path;

use crate::types::Layer;

/// Context provided to per-file rules.
///
/// Carries the decoded file text together with the layer the file is expected
/// to satisfy and the forbidden patterns that apply to that layer.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path to the file on disk.
    pub path: &'a Path,
    /// File contents, invalid UTF-8 already dropped.
    pub content: &'a str,
    /// Layer declared for this file in the layer map.
    pub layer: Layer,
    /// Forbidden patterns for `layer`; empty for unrestricted layers.
    pub forbidden: &'a [String],
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, layer: Layer, forbidden: &'a [String]) -> Self {
        Self {
            path,
            content,
            layer,
            forbidden,
        }
    }

    /// Iterates lines with their 1-indexed line numbers.
    ///
    /// Lines break as in [`split_lines`], so CR-only files are numbered too.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &'a str)> {
        split_lines(self.content).enumerate().map(|(i, l)| (i + 1, l))
    }

    /// Returns the first line, or `None` for an empty file.
    #[must_use]
    pub fn first_line(&self) -> Option<&'a str> {
        split_lines(self.content).next()
    }

    /// Returns true if `needle` occurs anywhere in the file.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.content.contains(needle)
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text into lines on every line boundary, `\r\n` counting as one.
///
/// A trailing boundary does not start an extra empty line, and empty text has
/// no lines.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some((i, c)) = rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..i];
        let mut next = i + c.len_utf8();
        if c == '\r' && rest[next..].starts_with('\n') {
            next += 1;
        }
        rest = &rest[next..];
        Some(line)
    })
}

/// Decodes bytes as UTF-8, silently dropping invalid sequences.
#[must_use]
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(content: &str) -> FileContext<'_> {
        FileContext::new(Path::new("arena.hpp"), content, Layer::L0, &[])
    }

    #[test]
    fn numbered_lines_start_at_one() {
        let content = "a\nb\r\nc";
        let lines: Vec<_> = ctx(content).numbered_lines().collect();
        assert_eq!(lines, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn bare_carriage_return_breaks_lines() {
        let lines: Vec<_> = ctx("// Layer: L0\r#include <vector>\r").numbered_lines().collect();
        assert_eq!(lines, vec![(1, "// Layer: L0"), (2, "#include <vector>")]);
        assert_eq!(ctx("#pragma once\r// Layer: L0\r").first_line(), Some("#pragma once"));
    }

    #[test]
    fn split_lines_handles_mixed_boundaries() {
        let lines: Vec<&str> = split_lines("a\r\nb\rc\nd\x0ce\u{2028}\n").collect();
        assert_eq!(lines, ["a", "b", "c", "d", "e", ""]);
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), [""]);
        assert_eq!(split_lines("x").collect::<Vec<_>>(), ["x"]);
    }

    #[test]
    fn first_line_of_empty_file_is_none() {
        assert_eq!(ctx("").first_line(), None);
        assert_eq!(ctx("// Layer: L0\nx").first_line(), Some("// Layer: L0"));
    }

    #[test]
    fn decode_drops_invalid_bytes() {
        let bytes = b"Layer:\xff\xfe L0\n\xc3\xa9t\xc3";
        assert_eq!(decode_dropping_invalid(bytes), "Layer: L0\n\u{e9}t");
    }

    #[test]
    fn decode_keeps_valid_text_untouched() {
        assert_eq!(decode_dropping_invalid("struct Foo {".as_bytes()), "struct Foo {");
    }
}
