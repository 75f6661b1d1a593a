use super::Chunk;
use crate::error::EditError;
use crate::observer::{EditEvent, EditObserver};
use crate::text::byte_index;

/// Stitch chunks back into one document.
///
/// Chunks are ordered by `start`. Each chunk contributes only the part past
/// the previous chunk's `end`; a chunk starting at or after that point is
/// appended whole, so gaps between chunks pass through silently.
///
/// After each chunk the running end becomes that chunk's `end`, even when an
/// earlier chunk reached further. A chunk nested inside its predecessor
/// therefore pulls the running end back and the next chunk repeats text.
/// Use [`reassemble_strict`] to reject such input.
pub fn reassemble(chunks: &[Chunk]) -> String {
    stitch(&sorted(chunks))
}

/// [`reassemble`] that fails instead of regressing.
///
/// # Errors
/// `NonMonotonicChunks` if, in `start` order, a chunk ends before the one
/// preceding it.
pub fn reassemble_strict(chunks: &[Chunk]) -> Result<String, EditError> {
    let ordered = sorted(chunks);
    for pair in ordered.windows(2) {
        if pair[1].end < pair[0].end {
            return Err(EditError::NonMonotonicChunks {
                previous_end: pair[0].end,
                end: pair[1].end,
            });
        }
    }
    Ok(stitch(&ordered))
}

/// [`reassemble`], reporting the result size to `observer`
pub fn reassemble_with(chunks: &[Chunk], observer: &dyn EditObserver) -> String {
    let document = reassemble(chunks);
    observer.info(&EditEvent::Reassembled {
        chunk_count: chunks.len(),
        doc_len: document.chars().count(),
    });
    document
}

fn sorted(chunks: &[Chunk]) -> Vec<&Chunk> {
    let mut ordered: Vec<&Chunk> = chunks.iter().collect();
    ordered.sort_by_key(|c| c.start);
    ordered
}

fn stitch(ordered: &[&Chunk]) -> String {
    let Some((first, rest)) = ordered.split_first() else {
        return String::new();
    };

    let mut document = first.text.clone();
    let mut last_end = first.end;

    for chunk in rest {
        if chunk.start >= last_end {
            document.push_str(&chunk.text);
        } else if let Some(idx) = byte_index(&chunk.text, last_end - chunk.start) {
            document.push_str(&chunk.text[idx..]);
        }
        last_end = chunk.end;
    }

    document
}
