use thiserror::Error;

/// Errors raised by chunking, locating and editing.
///
/// All of these are caller-input errors. Nothing in the crate performs I/O, so
/// none of them are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Offset out of range: [{start}, {end}) not within document of {len} chars")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("No chunk contains offset {offset}")]
    NoContainingChunk { offset: usize },

    #[error("Invalid line range: {start_line}..={end_line} (document has {line_count} lines)")]
    InvalidRange {
        start_line: usize,
        end_line: usize,
        line_count: usize,
    },

    #[error("Invalid chunk configuration: {0}")]
    InvalidConfig(String),

    #[error("Chunk ending at {end} follows a chunk ending at {previous_end}")]
    NonMonotonicChunks { previous_end: usize, end: usize },
}

impl EditError {
    /// True for the two variants that signal an offset outside the known range.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            EditError::OutOfRange { .. } | EditError::NoContainingChunk { .. }
        )
    }
}
