use super::{find_occurrences, replace_span, search_and_replace};
use crate::error::EditError;
use crate::locator::{LineIndex, Position};
use crate::observer::{EditEvent, EditObserver, TracingObserver};
use crate::text::slice_chars;
use serde::{Deserialize, Serialize};

/// One edit, in any of the three addressing modes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditRequest {
    /// Replace `[start, end)` (characters)
    Span {
        start: usize,
        end: usize,
        new_text: String,
    },
    /// Replace lines `start_line..=end_line` (1-based), terminators included
    Lines {
        start_line: usize,
        end_line: usize,
        new_text: String,
    },
    /// Replace the first, or every, occurrence of `search`
    Search {
        search: String,
        replacement: String,
        replace_all: bool,
    },
}

/// A span of the original document that an edit replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacedSpan {
    /// Character offsets in the original document
    pub global_start: usize,
    pub global_end: usize,
    /// Line/column of `global_start` and `global_end` in the original document
    pub start: Position,
    pub end: Position,
    /// The text that was removed
    pub before: String,
}

/// Result of applying an [`EditRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub document: String,
    /// Replaced spans in document order. Empty when nothing matched.
    pub replaced: Vec<ReplacedSpan>,
}

impl EditOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.replaced.is_empty()
    }
}

/// Applies edit requests to whole documents and reports each replacement.
///
/// The observer sees before/after text with line/column positions; it never
/// influences the returned document.
#[derive(Debug, Clone, Default)]
pub struct Editor<O: EditObserver = TracingObserver> {
    observer: O,
}

impl<O: EditObserver> Editor<O> {
    pub fn new(observer: O) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Apply `request` to `document`, producing a new document.
    ///
    /// Either the whole edit applies or an error is returned; there is no
    /// partially edited result.
    pub fn apply(&self, document: &str, request: &EditRequest) -> Result<EditOutcome, EditError> {
        let result = match request {
            EditRequest::Span {
                start,
                end,
                new_text,
            } => self.replace(document, *start, *end, new_text),
            EditRequest::Lines {
                start_line,
                end_line,
                new_text,
            } => LineIndex::new(document)
                .line_range(*start_line, *end_line)
                .and_then(|(start, end)| self.replace(document, start, end, new_text)),
            EditRequest::Search {
                search,
                replacement,
                replace_all,
            } => Ok(self.search(document, search, replacement, *replace_all)),
        };

        result.inspect_err(|e| self.observer.error(e))
    }

    fn replace(
        &self,
        document: &str,
        start: usize,
        end: usize,
        new_text: &str,
    ) -> Result<EditOutcome, EditError> {
        let before = slice_chars(document, start, end)?.to_string();
        let updated = replace_span(document, start, end, new_text)?;

        let index = LineIndex::new(document);
        let span = ReplacedSpan {
            global_start: start,
            global_end: end,
            start: index.position_of(start),
            end: index.position_of(end),
            before,
        };
        self.report(&span, new_text);

        Ok(EditOutcome {
            document: updated,
            replaced: vec![span],
        })
    }

    fn search(
        &self,
        document: &str,
        search: &str,
        replacement: &str,
        replace_all: bool,
    ) -> EditOutcome {
        // Positions come from the original document, before any replacement
        let mut occurrences = find_occurrences(document, search);
        if occurrences.is_empty() {
            self.observer.warn(&EditEvent::NotFound { search });
            return EditOutcome {
                document: document.to_string(),
                replaced: Vec::new(),
            };
        }
        if !replace_all {
            occurrences.truncate(1);
        }

        let index = LineIndex::new(document);
        let replaced: Vec<ReplacedSpan> = occurrences
            .into_iter()
            .map(|(start, end)| ReplacedSpan {
                global_start: start,
                global_end: end,
                start: index.position_of(start),
                end: index.position_of(end),
                before: search.to_string(),
            })
            .collect();
        for span in &replaced {
            self.report(span, replacement);
        }

        EditOutcome {
            document: search_and_replace(document, search, replacement, replace_all),
            replaced,
        }
    }

    fn report(&self, span: &ReplacedSpan, after: &str) {
        self.observer.info(&EditEvent::Replaced {
            global_start: span.global_start,
            global_end: span.global_end,
            start: span.start,
            end: span.end,
            before: &span.before,
            after,
        });
    }
}
