//! Character-offset helpers.
//!
//! Every offset in this crate counts `char`s, not bytes. These helpers do the
//! translation to byte indices so callers never slice a `str` mid-codepoint.

use crate::error::EditError;

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `offset`.
///
/// `offset == char_len(text)` maps to `text.len()`. Anything further is `None`.
pub fn byte_index(text: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return Some(0);
    }
    match text.char_indices().nth(offset) {
        Some((idx, _)) => Some(idx),
        None if char_len(text) == offset => Some(text.len()),
        None => None,
    }
}

/// Borrow the characters in `[start, end)`.
pub fn slice_chars(text: &str, start: usize, end: usize) -> Result<&str, EditError> {
    let out_of_range = || EditError::OutOfRange {
        start,
        end,
        len: char_len(text),
    };

    if start > end {
        return Err(out_of_range());
    }

    let start_byte = byte_index(text, start).ok_or_else(out_of_range)?;
    let end_byte = byte_index(text, end).ok_or_else(out_of_range)?;
    Ok(&text[start_byte..end_byte])
}

/// Byte index of every character boundary, including the end of the string.
///
/// `boundaries[i]` is the byte index of char `i`; the table has `char_len + 1`
/// entries. Used where many slices are taken from the same document.
pub(crate) fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .collect()
}
