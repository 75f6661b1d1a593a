mod request;


pub use request::{EditOutcome, EditRequest, Editor, ReplacedSpan};

use crate::error::EditError;
use crate::text::{byte_index, char_len};

/// Replace the characters in `[global_start, global_end)` with `new_text`.
///
/// Returns a new document; `document` itself is untouched. The span may
/// cross any chunk boundary since this works on the full text.
///
/// # Errors
/// `OutOfRange` when `global_start > global_end` or `global_end` is past the
/// end of the document.
pub fn replace_span(
    document: &str,
    global_start: usize,
    global_end: usize,
    new_text: &str,
) -> Result<String, EditError> {
    let out_of_range = || EditError::OutOfRange {
        start: global_start,
        end: global_end,
        len: char_len(document),
    };

    if global_start > global_end {
        return Err(out_of_range());
    }
    let start_byte = byte_index(document, global_start).ok_or_else(out_of_range)?;
    let end_byte = byte_index(document, global_end).ok_or_else(out_of_range)?;

    Ok(splice(document, start_byte, end_byte, new_text))
}

/// Character spans of every non-overlapping occurrence of `search`.
///
/// Scanning is left to right and resumes at the end of each match, so in
/// `"aaaa"` the search `"aa"` matches twice, not three times. An empty
/// `search` matches nothing.
pub fn find_occurrences(document: &str, search: &str) -> Vec<(usize, usize)> {
    if search.is_empty() {
        return Vec::new();
    }

    let search_chars = char_len(search);
    let mut spans = Vec::new();
    // Running (byte, char) position so each prefix is counted once
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for (idx, _) in document.match_indices(search) {
        char_pos += char_len(&document[byte_pos..idx]);
        spans.push((char_pos, char_pos + search_chars));
        byte_pos = idx;
    }

    spans
}

/// Replace occurrences of `search` with `replacement`.
///
/// With `replace_all` every non-overlapping occurrence is replaced; otherwise
/// only the first one is. A document without occurrences (or an empty
/// `search`) comes back unchanged.
pub fn search_and_replace(
    document: &str,
    search: &str,
    replacement: &str,
    replace_all: bool,
) -> String {
    if search.is_empty() {
        return document.to_string();
    }

    if replace_all {
        return document.replace(search, replacement);
    }

    match document.find(search) {
        Some(idx) => splice(document, idx, idx + search.len(), replacement),
        None => document.to_string(),
    }
}

/// `document[..start] + new_text + document[end..]` on byte indices
fn splice(document: &str, start: usize, end: usize, new_text: &str) -> String {
    let mut out = String::with_capacity(document.len() - (end - start) + new_text.len());
    out.push_str(&document[..start]);
    out.push_str(new_text);
    out.push_str(&document[end..]);
    out
}
