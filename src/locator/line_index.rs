use super::Position;
use crate::error::EditError;

/// Line-start table for one document.
///
/// Offsets are in characters. Only `'\n'` terminates a line; a `'\r'` before it
/// is ordinary line content.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Character offset where each line starts. `line_starts[0] == 0` always,
    /// and a trailing `'\n'` contributes a start equal to `len`.
    line_starts: Vec<usize>,
    /// Document length in characters
    len: usize,
}

impl LineIndex {
    /// Build the index in one pass over `document`
    pub fn new(document: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for ch in document.chars() {
            len += 1;
            if ch == '\n' {
                line_starts.push(len);
            }
        }
        Self { line_starts, len }
    }

    /// Document length in characters
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of lines when the document is split after each `'\n'`.
    ///
    /// A trailing newline does not open an extra line, and an empty document
    /// has no lines at all.
    pub fn line_count(&self) -> usize {
        if self.len == 0 {
            0
        } else if self.line_starts.last() == Some(&self.len) {
            self.line_starts.len() - 1
        } else {
            self.line_starts.len()
        }
    }

    /// Offset where 1-based `line` starts
    pub fn line_start(&self, line: usize) -> Option<usize> {
        if line == 0 || line > self.line_count() {
            return None;
        }
        self.line_starts.get(line - 1).copied()
    }

    /// `[start, end)` of 1-based `line`, terminator included
    pub fn line_span(&self, line: usize) -> Option<(usize, usize)> {
        let start = self.line_start(line)?;
        let end = self.line_starts.get(line).copied().unwrap_or(self.len);
        Some((start, end))
    }

    /// Line and column of `offset`. Offsets past the end clamp to the end.
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        // line_starts[0] == 0 <= offset, so the partition point is at least 1
        let idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position {
            line: idx + 1,
            col: offset - self.line_starts[idx],
        }
    }

    /// Span covering lines `start_line..=end_line`, terminators included.
    pub fn line_range(&self, start_line: usize, end_line: usize) -> Result<(usize, usize), EditError> {
        let line_count = self.line_count();
        let invalid = || EditError::InvalidRange {
            start_line,
            end_line,
            line_count,
        };

        if start_line < 1 || start_line > end_line || end_line > line_count {
            return Err(invalid());
        }

        let (start, _) = self.line_span(start_line).ok_or_else(invalid)?;
        let (_, end) = self.line_span(end_line).ok_or_else(invalid)?;
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(LineIndex::new("").line_count(), 0);
        assert_eq!(LineIndex::new("a").line_count(), 1);
        assert_eq!(LineIndex::new("a\n").line_count(), 1);
        assert_eq!(LineIndex::new("a\nb").line_count(), 2);
        assert_eq!(LineIndex::new("\n\n").line_count(), 2);
    }

    #[test]
    fn test_line_span_includes_terminator() {
        let index = LineIndex::new("line1\nline2\nline3");
        assert_eq!(index.line_span(1), Some((0, 6)));
        assert_eq!(index.line_span(2), Some((6, 12)));
        assert_eq!(index.line_span(3), Some((12, 17)));
        assert_eq!(index.line_span(4), None);
        assert_eq!(index.line_span(0), None);
    }

    #[test]
    fn test_position_past_end_clamps() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.position_of(99), Position { line: 2, col: 2 });
    }

    #[test]
    fn test_position_after_trailing_newline() {
        let index = LineIndex::new("ab\n");
        assert_eq!(index.position_of(3), Position { line: 2, col: 0 });
    }
}
