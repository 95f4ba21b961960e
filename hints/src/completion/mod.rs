//! Candidate resolution and ranking for key/value completion.
//! All coordinates are UTF-8 byte offsets into the document text.

use prefs::{SchemaEntry, ValueType};
use serde::Serialize;

mod candidates;
mod matchers;
mod query;
mod ranking;

pub(crate) use candidates::resolve_candidates;
pub(crate) use query::query_for_context;
pub use ranking::RankKey;
pub(crate) use ranking::rank_candidates;

/// Default for `HintsConfig.enable_setting`.
pub const DEFAULT_ENABLE_SETTING: &str = "codehint.PrefHints";

/// Configuration knobs for a [`crate::HintSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintsConfig {
    /// Quote used when the token under the cursor has none.
    pub default_quote: char,
    /// Value of `CompletionResult.select_first_by_default`.
    pub select_first: bool,
    /// Accept subsequence matches in addition to prefix/substring matches.
    pub fuzzy: bool,
    /// Boolean setting that enables or disables hints globally.
    pub enable_setting: String,
    /// File names that mark the active document as a preferences document.
    pub preference_file_names: Vec<String>,
}

impl Default for HintsConfig {
    fn default() -> Self {
        Self {
            default_quote: '"',
            select_first: true,
            fuzzy: true,
            enable_setting: DEFAULT_ENABLE_SETTING.to_string(),
            preference_file_names: vec![".prefs.json".to_string(), "prefs.json".to_string()],
        }
    }
}

/// One possible completion string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub raw_text: String,
    pub value_type: Option<ValueType>,
    pub description: Option<String>,
}

impl Candidate {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            value_type: None,
            description: None,
        }
    }

    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Key candidate carrying the entry's type (unless `None`) and description.
    pub(crate) fn from_entry(entry: &SchemaEntry) -> Self {
        Self {
            raw_text: entry.key.clone(),
            value_type: (entry.value_type != ValueType::None).then_some(entry.value_type),
            description: entry.description.clone(),
        }
    }
}

/// A run of candidate text that did or did not contribute to the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightRange {
    pub text: String,
    pub matched: bool,
}

/// A candidate annotated with how it matched the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub candidate: Candidate,
    pub ranges_for_highlight: Vec<HighlightRange>,
    #[serde(skip)]
    pub rank_key: RankKey,
}

/// Ranked completions for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub candidates: Vec<MatchRecord>,
    pub query: String,
    pub select_first_by_default: bool,
}
