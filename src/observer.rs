//! Diagnostic hooks.
//!
//! Chunking and editing report what they did through an [`EditObserver`]
//! handed in by the caller. Observers only receive events; nothing they do can
//! change a returned value.

use crate::error::EditError;
use crate::locator::Position;
use std::time::Duration;

/// Longest snippet (in chars) carried by [`TracingObserver`] log lines
const SNIPPET_CHARS: usize = 80;

/// Something worth reporting during chunking or editing
#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent<'a> {
    /// A document was split into chunks
    Chunked {
        doc_len: usize,
        chunk_count: usize,
        max_length: usize,
        overlap: usize,
        elapsed: Duration,
    },
    /// An edit span was mapped onto a chunk
    Located {
        chunk_index: usize,
        global_start: usize,
        global_end: usize,
        local_start: usize,
        local_end: usize,
    },
    /// A span of the original document was replaced
    Replaced {
        global_start: usize,
        global_end: usize,
        start: Position,
        end: Position,
        before: &'a str,
        after: &'a str,
    },
    /// A search string had no occurrences; the document is unchanged
    NotFound { search: &'a str },
    /// Chunks were stitched back into a document
    Reassembled { chunk_count: usize, doc_len: usize },
}

/// Receiver for informational, warning and error events.
///
/// All methods default to doing nothing.
pub trait EditObserver {
    fn info(&self, _event: &EditEvent<'_>) {}

    fn warn(&self, _event: &EditEvent<'_>) {}

    fn error(&self, _error: &EditError) {}
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl EditObserver for NullObserver {}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    fn log(event: &EditEvent<'_>, warn: bool) {
        match event {
            EditEvent::Chunked {
                doc_len,
                chunk_count,
                max_length,
                overlap,
                elapsed,
            } => tracing::info!(
                doc_len,
                chunk_count,
                max_length,
                overlap,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "chunked document"
            ),
            EditEvent::Located {
                chunk_index,
                global_start,
                global_end,
                local_start,
                local_end,
            } => tracing::debug!(
                chunk_index,
                global_start,
                global_end,
                local_start,
                local_end,
                "located edit span"
            ),
            EditEvent::Replaced {
                global_start,
                global_end,
                start,
                end,
                before,
                after,
            } => tracing::info!(
                global_start,
                global_end,
                start = %start,
                end = %end,
                before = %snippet(before),
                after = %snippet(after),
                "replaced span"
            ),
            EditEvent::NotFound { search } if warn => {
                tracing::warn!(search = %snippet(search), "search string not found")
            }
            EditEvent::NotFound { search } => {
                tracing::info!(search = %snippet(search), "search string not found")
            }
            EditEvent::Reassembled {
                chunk_count,
                doc_len,
            } => tracing::info!(chunk_count, doc_len, "reassembled document"),
        }
    }
}

impl EditObserver for TracingObserver {
    fn info(&self, event: &EditEvent<'_>) {
        Self::log(event, false);
    }

    fn warn(&self, event: &EditEvent<'_>) {
        Self::log(event, true);
    }

    fn error(&self, error: &EditError) {
        tracing::error!(%error, "edit failed");
    }
}

/// First [`SNIPPET_CHARS`] characters of `text`, with an ellipsis if cut
fn snippet(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_short_text_unchanged() {
        assert_eq!(snippet("hello"), "hello");
    }

    #[test]
    fn test_snippet_truncates_long_text() {
        let long = "x".repeat(200);
        let s = snippet(&long);
        assert!(s.ends_with("..."));
        assert_eq!(s.chars().count(), SNIPPET_CHARS + 3);
    }

    #[test]
    fn test_null_observer_accepts_everything() {
        let observer = NullObserver;
        observer.info(&EditEvent::NotFound { search: "x" });
        observer.warn(&EditEvent::Reassembled {
            chunk_count: 0,
            doc_len: 0,
        });
        observer.error(&EditError::InvalidConfig("bad".to_string()));
    }
}
