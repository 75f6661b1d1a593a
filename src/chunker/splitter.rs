use crate::config::ChunkConfig;
use crate::error::EditError;
use crate::observer::{EditEvent, EditObserver};
use crate::text::{char_boundaries, char_len};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A window of the document tagged with its global offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The text content of this chunk
    pub text: String,
    /// Character offset in the original document (start, inclusive)
    pub start: usize,
    /// Character offset in the original document (end, exclusive)
    pub end: usize,
}

impl Chunk {
    /// Length of `text` in characters
    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }

    /// Whether global `offset` falls inside `[start, end)`
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Split `document` into overlapping windows of at most `max_length` chars.
///
/// The first chunk starts at 0. Each following chunk starts `overlap` chars
/// before the previous one ended, until a chunk reaches the document end. An
/// empty document yields no chunks.
///
/// # Errors
/// `InvalidConfig` when `max_length == 0` or `overlap >= max_length`, since
/// the window could never advance.
pub fn chunk(document: &str, max_length: usize, overlap: usize) -> Result<Vec<Chunk>, EditError> {
    ChunkConfig::new(max_length, overlap).validate()?;

    let bounds = char_boundaries(document);
    let len = bounds.len() - 1;
    let mut chunks = Vec::new();

    if len == 0 {
        return Ok(chunks);
    }

    let mut start = 0;
    loop {
        let end = (start + max_length).min(len);
        chunks.push(Chunk {
            text: document[bounds[start]..bounds[end]].to_string(),
            start,
            end,
        });

        if end == len {
            break;
        }
        // overlap < max_length, so this always moves forward
        start = end - overlap;
    }

    Ok(chunks)
}

/// [`chunk`] driven by a [`ChunkConfig`], reporting size and timing.
pub fn chunk_with(
    document: &str,
    config: &ChunkConfig,
    observer: &dyn EditObserver,
) -> Result<Vec<Chunk>, EditError> {
    let started = Instant::now();
    let chunks = chunk(document, config.max_length, config.overlap).inspect_err(|e| {
        observer.error(e);
    })?;

    observer.info(&EditEvent::Chunked {
        doc_len: chunks.last().map(|c| c.end).unwrap_or(0),
        chunk_count: chunks.len(),
        max_length: config.max_length,
        overlap: config.overlap,
        elapsed: started.elapsed(),
    });

    Ok(chunks)
}

#[cfg(test)]
mod chunk_tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let chunks = chunk("", 10, 2).unwrap();
        assert_eq!(chunks.len(), 0);
    }

    #[test]
    fn test_document_shorter_than_window() {
        let chunks = chunk("hello", 10, 2).unwrap();
        assert_eq!(
            chunks,
            vec![Chunk {
                text: "hello".to_string(),
                start: 0,
                end: 5
            }]
        );
    }

    #[test]
    fn test_exact_fit_is_single_chunk() {
        let chunks = chunk("abcdefghij", 10, 3).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].end, 10);
    }

    #[test]
    fn test_overlapping_windows() {
        let chunks = chunk("abcdefghij01234", 10, 5).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "abcdefghij");
        assert_eq!((chunks[1].start, chunks[1].end), (5, 15));
        assert_eq!(chunks[1].text, "fghij01234");
    }

    #[test]
    fn test_zero_overlap() {
        let chunks = chunk("abcdefghij0123456789", 10, 0).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].text, "0123456789");
        assert_eq!(chunks[1].start, 10);
    }

    #[test]
    fn test_short_tail() {
        // Windows: [0,4) [3,7) [6,10) [9,11)
        let chunks = chunk("abcdefghijk", 4, 1).unwrap();
        let spans: Vec<(usize, usize)> = chunks.iter().map(|c| (c.start, c.end)).collect();
        assert_eq!(spans, vec![(0, 4), (3, 7), (6, 10), (9, 11)]);
        assert_eq!(chunks[3].text, "jk");
    }

    #[test]
    fn test_offsets_are_chars() {
        let chunks = chunk("αβγδε", 3, 1).unwrap();
        assert_eq!(chunks[0].text, "αβγ");
        assert_eq!(chunks[1].text, "γδε");
        assert_eq!((chunks[1].start, chunks[1].end), (2, 5));
        assert_eq!(chunks[1].char_len(), 3);
    }

    #[test]
    fn test_rejects_overlap_not_below_length() {
        assert!(matches!(
            chunk("abcdef", 3, 3),
            Err(EditError::InvalidConfig(_))
        ));
        assert!(matches!(
            chunk("abcdef", 3, 7),
            Err(EditError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zero_length() {
        assert!(matches!(chunk("abc", 0, 0), Err(EditError::InvalidConfig(_))));
    }

    #[test]
    fn test_contains() {
        let c = Chunk {
            text: "cde".to_string(),
            start: 2,
            end: 5,
        };
        assert!(!c.contains(1));
        assert!(c.contains(2));
        assert!(c.contains(4));
        assert!(!c.contains(5));
    }
}
