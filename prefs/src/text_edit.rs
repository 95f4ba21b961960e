use serde::Serialize;

use crate::span::Span;

/// A single text edit in byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}
