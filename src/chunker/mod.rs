mod locate;
mod reassemble;
mod splitter;


pub use locate::{ChunkLocation, find_chunk_for_edit, find_chunk_for_edit_with};
pub use reassemble::{reassemble, reassemble_strict, reassemble_with};
pub use splitter::{Chunk, chunk, chunk_with};

/// Default maximum chunk length in characters
pub const DEFAULT_MAX_LENGTH: usize = 4000;

/// Default overlap between adjacent chunks in characters
pub const DEFAULT_OVERLAP: usize = 200;
