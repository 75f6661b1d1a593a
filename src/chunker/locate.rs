use super::Chunk;
use crate::error::EditError;
use crate::observer::{EditEvent, EditObserver};
use serde::{Deserialize, Serialize};

/// Where an edit span lands inside a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkLocation {
    /// Index into the chunk slice
    pub chunk_index: usize,
    /// Span start relative to the chunk
    pub local_start: usize,
    /// Span end relative to the chunk, clamped to the chunk length
    pub local_end: usize,
}

/// Map a global `[global_start, global_end)` span onto the first chunk that
/// contains `global_start`.
///
/// This assumes the whole edit fits in one chunk. A span running past the
/// chunk end gets `local_end` clamped to the chunk length, so edits that cross
/// chunk boundaries must be applied to the full document with
/// [`replace_span`](crate::editor::replace_span) instead.
///
/// Zero-width spans (`global_start == global_end`) are allowed.
///
/// # Errors
/// `OutOfRange` for a reversed span, `NoContainingChunk` when no chunk
/// covers `global_start` (e.g. `global_start` equal to the document length).
pub fn find_chunk_for_edit(
    chunks: &[Chunk],
    global_start: usize,
    global_end: usize,
) -> Result<ChunkLocation, EditError> {
    if global_end < global_start {
        return Err(EditError::OutOfRange {
            start: global_start,
            end: global_end,
            len: chunks.iter().map(|c| c.end).max().unwrap_or(0),
        });
    }

    chunks
        .iter()
        .enumerate()
        .find(|(_, c)| c.contains(global_start))
        .map(|(chunk_index, c)| ChunkLocation {
            chunk_index,
            local_start: global_start - c.start,
            local_end: (global_end - c.start).min(c.char_len()),
        })
        .ok_or(EditError::NoContainingChunk {
            offset: global_start,
        })
}

/// [`find_chunk_for_edit`], reporting the result to `observer`
pub fn find_chunk_for_edit_with(
    chunks: &[Chunk],
    global_start: usize,
    global_end: usize,
    observer: &dyn EditObserver,
) -> Result<ChunkLocation, EditError> {
    match find_chunk_for_edit(chunks, global_start, global_end) {
        Ok(location) => {
            observer.info(&EditEvent::Located {
                chunk_index: location.chunk_index,
                global_start,
                global_end,
                local_start: location.local_start,
                local_end: location.local_end,
            });
            Ok(location)
        }
        Err(e) => {
            observer.error(&e);
            Err(e)
        }
    }
}
