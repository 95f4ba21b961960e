use prefs::TextEdit;
use tracing::debug;

use crate::gate::JSON_MODE;
use crate::host::{EditorHandle, TextBuffer};

/// Applies byte-offset text edits and rebases a byte cursor through them.
///
/// The caller must provide non-overlapping edits sorted by `(start, end)`.
/// Edits are applied in descending order to avoid shifting later offsets. An edit whose
/// range is out of bounds or splits a UTF-8 character is skipped.
///
/// Cursor rules:
/// - edits fully before the cursor shift it by the byte delta
/// - a cursor strictly inside a replaced range snaps to the edit `start`
pub fn apply_text_edits_bytes_with_cursor(
    source: &str,
    edits: &[TextEdit],
    cursor: u32,
) -> (String, u32) {
    let mut updated = source.to_string();
    let mut cursor = cursor;

    for edit in edits.iter().rev() {
        let (Ok(start), Ok(end)) = (
            usize::try_from(edit.range.start),
            usize::try_from(edit.range.end),
        ) else {
            continue;
        };
        if start > end
            || end > updated.len()
            || !updated.is_char_boundary(start)
            || !updated.is_char_boundary(end)
        {
            debug!(start, end, len = updated.len(), "skipping invalid text edit");
            continue;
        }

        let replaced_len = i64::from(edit.range.end - edit.range.start);
        let inserted_len = i64::try_from(edit.new_text.len()).unwrap_or(i64::MAX);
        let delta = inserted_len - replaced_len;

        if edit.range.end <= cursor {
            let rebased = i64::from(cursor).saturating_add(delta).max(0);
            cursor = u32::try_from(rebased).unwrap_or(u32::MAX);
        } else if edit.range.start < cursor && cursor < edit.range.end {
            cursor = edit.range.start;
        }

        updated.replace_range(start..end, &edit.new_text);
    }

    (updated, cursor)
}

/// An in-memory buffer, usable as the text-buffer and editor service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
    cursor: u32,
    mode: String,
}

impl StringBuffer {
    /// A JSON-mode buffer with the cursor at `cursor`.
    pub fn new(text: impl Into<String>, cursor: u32) -> Self {
        Self {
            text: text.into(),
            cursor,
            mode: JSON_MODE.to_string(),
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
}

impl TextBuffer for StringBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn replace_range(&mut self, new_text: &str, start: u32, end: u32) {
        let edit = TextEdit {
            range: prefs::Span::new(start, end),
            new_text: new_text.to_string(),
        };
        let (text, cursor) = apply_text_edits_bytes_with_cursor(&self.text, &[edit], self.cursor);
        self.text = text;
        self.cursor = cursor;
    }

    fn set_cursor(&mut self, offset: u32) {
        self.cursor = offset;
    }

    fn cursor(&self) -> u32 {
        self.cursor
    }
}

impl EditorHandle for StringBuffer {
    fn content_mode(&self) -> &str {
        &self.mode
    }
}
