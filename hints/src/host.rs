//! Interfaces to the host: context analysis, text buffer, dynamic value registries and
//! the preference store.
//!
//! Offsets are UTF-8 byte offsets into the buffer text.

use std::collections::HashMap;

use indexmap::IndexMap;
use prefs::Context;

/// Punctuation that can never be part of a bare key or value token.
const STRUCTURAL_CHARS: [char; 6] = [',', ':', '{', '}', '[', ']'];

/// Default token classifier: `true` when `text` has no key/value characters at all
/// (empty, whitespace, or structural punctuation only).
pub fn is_disallowed_key_value_text(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || STRUCTURAL_CHARS.contains(&c))
}

/// Tokenizes the document around the cursor into a [`Context`].
pub trait ContextAnalyzer {
    /// Returns `None` when the cursor is not inside anything completable.
    ///
    /// `allow_nested` lets the analyzer look through nested objects to find the
    /// parent key; insertion re-resolves with it disabled.
    fn resolve_context(&self, source: &str, cursor: u32, allow_nested: bool) -> Option<Context>;

    /// Whether `text` should be treated as "no query" / a placeholder token.
    fn is_disallowed_key_value_char(&self, text: &str) -> bool {
        is_disallowed_key_value_text(text)
    }
}

/// Mutable document storage with a single cursor.
pub trait TextBuffer {
    fn text(&self) -> &str;
    fn replace_range(&mut self, new_text: &str, start: u32, end: u32);
    fn set_cursor(&mut self, offset: u32);
    fn cursor(&self) -> u32;
}

/// An editor showing a buffer in some content mode (e.g. `application/json`).
pub trait EditorHandle: TextBuffer {
    fn content_mode(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    pub id: String,
    pub name: Option<String>,
}

impl LanguageInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeInfo {
    pub name: String,
}

/// Registries whose contents change at runtime and are queried per request.
pub trait ValueProviders {
    /// Known language ids in registry order.
    fn languages(&self) -> Vec<LanguageInfo>;
    /// Lint provider ids registered for `language_id`, in preference order.
    fn lint_providers_for_language(&self, language_id: &str) -> Vec<String>;
    fn themes(&self) -> Vec<ThemeInfo>;

    fn has_language(&self, language_id: &str) -> bool {
        self.languages().iter().any(|lang| lang.id == language_id)
    }
}

/// Fixed provider contents, for hosts that snapshot their registries.
#[derive(Debug, Clone, Default)]
pub struct StaticProviders {
    languages: Vec<LanguageInfo>,
    lint_providers: IndexMap<String, Vec<String>>,
    themes: Vec<ThemeInfo>,
}

impl StaticProviders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: LanguageInfo) -> Self {
        self.languages.push(language);
        self
    }

    pub fn lint_providers<I, S>(mut self, language_id: impl Into<String>, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lint_providers
            .entry(language_id.into())
            .or_default()
            .extend(providers.into_iter().map(Into::into));
        self
    }

    pub fn theme(mut self, name: impl Into<String>) -> Self {
        self.themes.push(ThemeInfo { name: name.into() });
        self
    }
}

impl ValueProviders for StaticProviders {
    fn languages(&self) -> Vec<LanguageInfo> {
        self.languages.clone()
    }

    fn lint_providers_for_language(&self, language_id: &str) -> Vec<String> {
        self.lint_providers
            .get(language_id)
            .cloned()
            .unwrap_or_default()
    }

    fn themes(&self) -> Vec<ThemeInfo> {
        self.themes.clone()
    }
}

/// Read access to the host's boolean settings.
pub trait PreferenceStore {
    fn get_bool(&self, name: &str) -> Option<bool>;
}

impl PreferenceStore for HashMap<String, bool> {
    fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}
