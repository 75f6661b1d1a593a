mod line_index;

#[cfg(test)]
mod tests;

pub use line_index::LineIndex;

use crate::error::EditError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Line/column of a character offset.
///
/// `line` is 1-based, `col` is 0-based and counts characters since the last
/// `'\n'` (or since the start of the document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Line and column of `offset` in `document`.
///
/// Offsets past the end of the document clamp to the end.
pub fn position_of(document: &str, offset: usize) -> Position {
    LineIndex::new(document).position_of(offset)
}

/// Convert an inclusive 1-based line range into a `[start, end)` character span.
///
/// `start` is the offset of the first character of `start_line`; `end` is the
/// offset just past the terminator of `end_line` (or the document end if that
/// line has none).
///
/// # Errors
/// `InvalidRange` when `start_line < 1`, `start_line > end_line`, or
/// `end_line` is past the last line.
pub fn line_range_to_offsets(
    document: &str,
    start_line: usize,
    end_line: usize,
) -> Result<(usize, usize), EditError> {
    LineIndex::new(document).line_range(start_line, end_line)
}
