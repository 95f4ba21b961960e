//! Schema registry: known preference keys, their value types and nested key maps.
//!
//! Build order is deterministic: built-in roots first, then descriptors in source order.
//! Root registration order is what candidate lists fall back to when ranking ties.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

mod builtins;
mod descriptor;

pub use descriptor::{PreferenceDescriptor, SchemaError};

/// Declared value type of a preference.
///
/// Unknown type tags deserialize to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    #[default]
    #[serde(other)]
    None,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Object => "object",
            ValueType::Array => "array",
            ValueType::None => "none",
        }
    }

    pub fn is_scalar(self) -> bool {
        match self {
            ValueType::String | ValueType::Number | ValueType::Boolean => true,
            ValueType::Object | ValueType::Array | ValueType::None => false,
        }
    }
}

/// One known preference key.
///
/// `children` is only kept for `Object` entries. `item_type` describes array elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaEntry {
    pub key: String,
    pub value_type: ValueType,
    pub item_type: Option<ValueType>,
    pub description: Option<String>,
    pub children: Option<IndexMap<String, SchemaEntry>>,
    pub allowed_values: Option<Vec<String>>,
}

impl SchemaEntry {
    pub fn new(key: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            key: key.into(),
            value_type,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_item_type(mut self, item_type: ValueType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a nested key. Ignored unless this entry is an object.
    pub fn with_child(mut self, child: SchemaEntry) -> Self {
        if self.value_type == ValueType::Object {
            self.children
                .get_or_insert_with(IndexMap::new)
                .insert(child.key.clone(), child);
        }
        self
    }

    pub fn child(&self, key: &str) -> Option<&SchemaEntry> {
        self.children.as_ref()?.get(key)
    }

    /// Amends `self` with `other`.
    ///
    /// Rule: last write wins per field that `other` actually carries; a `None` type or an
    /// absent field never erases what is already there; nested keys are unioned, merging
    /// recursively on collisions.
    pub fn merge(&mut self, other: SchemaEntry) {
        if other.value_type != ValueType::None {
            self.value_type = other.value_type;
        }
        if other.item_type.is_some() {
            self.item_type = other.item_type;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        if other.allowed_values.is_some() {
            self.allowed_values = other.allowed_values;
        }
        if let Some(children) = other.children {
            let mine = self.children.get_or_insert_with(IndexMap::new);
            for (key, child) in children {
                match mine.get_mut(&key) {
                    Some(existing) => existing.merge(child),
                    None => {
                        mine.insert(key, child);
                    }
                }
            }
        }
        if self.value_type != ValueType::Object {
            self.children = None;
        }
    }
}

/// Catalog of root preference keys. Lookups never remove entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistry {
    root: IndexMap<String, SchemaEntry>,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaRegistry {
    /// Registry holding only the built-in `language` and `path` roots.
    pub fn new() -> Self {
        let mut root = IndexMap::new();
        for entry in builtins::builtin_entries() {
            root.insert(entry.key.clone(), entry);
        }
        Self { root }
    }

    /// Seeds the built-ins, then folds `prefs` in order.
    ///
    /// Descriptors flagged `exclude_from_hints` are skipped.
    pub fn build<I, S>(prefs: I) -> Self
    where
        I: IntoIterator<Item = (S, PreferenceDescriptor)>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (key, descriptor) in prefs {
            let key = key.into();
            if descriptor.exclude_from_hints {
                debug!(key = %key, "preference excluded from hints");
                continue;
            }
            registry.insert(descriptor.into_entry(key));
        }
        registry
    }

    /// Registers `entry`, merging into an existing entry with the same key.
    pub fn insert(&mut self, entry: SchemaEntry) {
        match self.root.get_mut(&entry.key) {
            Some(existing) => existing.merge(entry),
            None => {
                self.root.insert(entry.key.clone(), entry);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&SchemaEntry> {
        self.root.get(key)
    }

    /// Looks up `parent` → children → `key`.
    pub fn nested(&self, parent: &str, key: &str) -> Option<&SchemaEntry> {
        self.root.get(parent)?.child(key)
    }

    /// Root entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.root.values()
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
