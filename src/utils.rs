//! Common utility functions shared across the codebase.

/// Byte-offset to line/column lookup table for a source text.
///
/// Line starts are pre-computed once so that every lookup is a binary
/// search instead of a rescan of the text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0]; // Line 1 starts at offset 0
        for (i, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    /// 1-based line number containing `offset`.
    pub fn line(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1, // Exact match at line start
            Err(line) => line,    // Falls within this line
        }
    }

    /// 1-based `(line, column)` for a byte offset.
    ///
    /// Columns count characters, not bytes, so non-ASCII text before the
    /// offset doesn't skew the reported position.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let line = self.line(offset);
        let line_start = self.line_starts[line - 1];
        let column = self
            .text
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        (line, column + 1)
    }
}

/// Render a count with a singular or plural noun ("1 file", "3 files").
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
