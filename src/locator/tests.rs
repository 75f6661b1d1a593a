use super::*;

#[test]
fn test_position_of_start() {
    assert_eq!(position_of("anything", 0), Position { line: 1, col: 0 });
    assert_eq!(position_of("", 0), Position { line: 1, col: 0 });
}

#[test]
fn test_position_of_second_line() {
    let doc = "ab\ncd";
    assert_eq!(position_of(doc, 3), Position { line: 2, col: 0 });
    assert_eq!(position_of(doc, 5), Position { line: 2, col: 2 });
}

#[test]
fn test_position_of_newline_itself() {
    // The '\n' belongs to the line it terminates
    let doc = "ab\ncd";
    assert_eq!(position_of(doc, 2), Position { line: 1, col: 2 });
}

#[test]
fn test_position_of_counts_chars_not_bytes() {
    let doc = "héllo\nwörld";
    assert_eq!(position_of(doc, 5), Position { line: 1, col: 5 });
    assert_eq!(position_of(doc, 8), Position { line: 2, col: 2 });
}

#[test]
fn test_position_display() {
    assert_eq!(Position { line: 3, col: 7 }.to_string(), "3:7");
}

#[test]
fn test_line_range_single_line() {
    let doc = "line1\nline2\nline3\n";
    assert_eq!(line_range_to_offsets(doc, 2, 2), Ok((6, 12)));
    assert_eq!(&doc[6..12], "line2\n");
}

#[test]
fn test_line_range_whole_document() {
    let doc = "line1\nline2\nline3\n";
    assert_eq!(line_range_to_offsets(doc, 1, 3), Ok((0, doc.len())));
}

#[test]
fn test_line_range_last_line_without_terminator() {
    let doc = "a\nbb\nccc";
    assert_eq!(line_range_to_offsets(doc, 3, 3), Ok((5, 8)));
    assert_eq!(line_range_to_offsets(doc, 2, 3), Ok((2, 8)));
}

#[test]
fn test_line_range_rejects_zero_start() {
    let err = line_range_to_offsets("a\nb\n", 0, 1).unwrap_err();
    assert_eq!(
        err,
        EditError::InvalidRange {
            start_line: 0,
            end_line: 1,
            line_count: 2
        }
    );
}

#[test]
fn test_line_range_rejects_reversed() {
    assert!(matches!(
        line_range_to_offsets("a\nb\nc\n", 3, 2),
        Err(EditError::InvalidRange { .. })
    ));
}

#[test]
fn test_line_range_rejects_past_end() {
    // Trailing newline does not open a fourth line
    assert!(matches!(
        line_range_to_offsets("line1\nline2\nline3\n", 1, 4),
        Err(EditError::InvalidRange { line_count: 3, .. })
    ));
}

#[test]
fn test_line_range_empty_document() {
    assert!(line_range_to_offsets("", 1, 1).is_err());
}

#[test]
fn test_line_range_multibyte() {
    let doc = "日本\n語\n";
    assert_eq!(line_range_to_offsets(doc, 2, 2), Ok((3, 5)));
}
