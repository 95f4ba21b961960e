use super::{SchemaEntry, ValueType};
use crate::keys;

/// Roots that exist regardless of the preference source.
pub(super) fn builtin_entries() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry::new(keys::LANGUAGE, ValueType::Object)
            .with_description("Language specific preferences."),
        SchemaEntry::new(keys::PATH, ValueType::Object)
            .with_description("Path specific preferences."),
    ]
}
