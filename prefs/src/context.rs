//! Cursor context for one completion request.
//!
//! Produced by the host's context-analysis service and treated as immutable afterwards.
//! All coordinates are UTF-8 byte offsets into the document.

use std::collections::HashSet;

use crate::span::Span;

/// Whether the cursor sits in an object key or in a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Key,
    Value,
}

/// The document token under the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Creates a token whose span starts at `start` and covers `text`.
    pub fn new(text: impl Into<String>, start: u32) -> Self {
        let text = text.into();
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        Self {
            span: Span::new(start, start.saturating_add(len)),
            text,
        }
    }

    /// Returns the leading quote character (`"` or `'`), if the token has one.
    pub fn quote_char(&self) -> Option<char> {
        match self.text.chars().next() {
            Some(c @ ('"' | '\'')) => Some(c),
            _ => None,
        }
    }

    /// Token text up to `offset` bytes, snapped down to a char boundary.
    pub fn text_before(&self, offset: u32) -> &str {
        let mut end = usize::try_from(offset)
            .unwrap_or(usize::MAX)
            .min(self.text.len());
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        &self.text[..end]
    }
}

/// Structural location of the cursor.
///
/// `parent_key_name` and `key_name` are empty at the document root.
/// `token_type` is `None` when the analyzer could not classify the position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub token_type: Option<TokenType>,
    pub parent_key_name: String,
    pub key_name: String,
    pub token: Token,
    /// Cursor offset relative to `token.span.start`.
    pub offset_in_token: u32,
    pub is_array_element: bool,
    pub should_replace_whole_token: bool,
    /// Sibling keys already present in the enclosing object.
    pub exclusion_list: HashSet<String>,
}

impl Context {
    pub fn key(token: Token, offset_in_token: u32) -> Self {
        Self {
            token_type: Some(TokenType::Key),
            token,
            offset_in_token,
            ..Self::default()
        }
    }

    pub fn value(token: Token, offset_in_token: u32) -> Self {
        Self {
            token_type: Some(TokenType::Value),
            token,
            offset_in_token,
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent_key_name: impl Into<String>) -> Self {
        self.parent_key_name = parent_key_name.into();
        self
    }

    pub fn with_key(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = key_name.into();
        self
    }

    pub fn in_array(mut self) -> Self {
        self.is_array_element = true;
        self
    }

    pub fn replacing_whole_token(mut self) -> Self {
        self.should_replace_whole_token = true;
        self
    }

    pub fn excluding<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusion_list.extend(keys.into_iter().map(Into::into));
        self
    }
}
