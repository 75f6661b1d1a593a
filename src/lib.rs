// Public API exports
pub mod chunker;
pub mod config;
pub mod editor;
pub mod error;
pub mod locator;
pub mod observer;
pub mod text;

// Re-export main types for convenience
pub use chunker::{
    Chunk, ChunkLocation, DEFAULT_MAX_LENGTH, DEFAULT_OVERLAP, chunk, chunk_with,
    find_chunk_for_edit, find_chunk_for_edit_with, reassemble, reassemble_strict,
    reassemble_with,
};
pub use config::ChunkConfig;
pub use editor::{
    EditOutcome, EditRequest, Editor, ReplacedSpan, find_occurrences, replace_span,
    search_and_replace,
};
pub use error::EditError;
pub use locator::{LineIndex, Position, line_range_to_offsets, position_of};
pub use observer::{EditEvent, EditObserver, NullObserver, TracingObserver};
