//! Preference descriptors as published by the preference system, and JSON loading.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use super::{SchemaEntry, SchemaRegistry, ValueType};

/// Errors from loading a whole preference source.
///
/// Malformed individual descriptors are not errors; they are skipped.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("preference source is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("preference source must be a JSON object keyed by preference id")]
    NotAnObject,
}

/// Metadata for one known preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreferenceDescriptor {
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "excludeFromHints", default)]
    pub exclude_from_hints: bool,
    /// Nested descriptors; malformed children are skipped.
    #[serde(default, deserialize_with = "lenient_keys")]
    pub keys: Option<IndexMap<String, PreferenceDescriptor>>,
    /// Allowed values; numbers are stored in their JSON text form.
    #[serde(default, deserialize_with = "stringified_values")]
    pub values: Option<Vec<String>>,
    /// Element type for `array` preferences.
    #[serde(rename = "valueType", default)]
    pub item_type: Option<ValueType>,
}

impl PreferenceDescriptor {
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            ..Self::default()
        }
    }

    /// Converts into a schema entry named `key`, recursing into nested keys.
    pub fn into_entry(self, key: impl Into<String>) -> SchemaEntry {
        let children = match self.value_type {
            ValueType::Object => self.keys.map(|keys| {
                keys.into_iter()
                    .filter(|(_, child)| !child.exclude_from_hints)
                    .map(|(name, child)| (name.clone(), child.into_entry(name)))
                    .collect()
            }),
            _ => None,
        };

        SchemaEntry {
            key: key.into(),
            value_type: self.value_type,
            item_type: self.item_type.filter(|ty| *ty != ValueType::None),
            description: self.description,
            children,
            allowed_values: self.values,
        }
    }
}

fn stringified_values<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw.map(|values| {
        values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(text) => Some(text),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .collect()
    }))
}

fn lenient_keys<'de, D>(
    deserializer: D,
) -> Result<Option<IndexMap<String, PreferenceDescriptor>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?;
    Ok(raw.map(|keys| {
        keys.into_iter()
            .filter_map(|(key, raw)| parse_descriptor(&key, &raw).map(|child| (key, child)))
            .collect()
    }))
}

/// Parses one descriptor, logging and dropping it when malformed.
fn parse_descriptor(key: &str, raw: &Value) -> Option<PreferenceDescriptor> {
    match PreferenceDescriptor::deserialize(raw) {
        Ok(descriptor) => Some(descriptor),
        Err(err) => {
            debug!(key = %key, error = %err, "skipping malformed preference descriptor");
            None
        }
    }
}

impl SchemaRegistry {
    /// Builds a registry from a JSON object mapping preference id → descriptor.
    pub fn from_json_value(source: &Value) -> Result<Self, SchemaError> {
        let Value::Object(map) = source else {
            return Err(SchemaError::NotAnObject);
        };

        let prefs = map
            .iter()
            .filter_map(|(key, raw)| parse_descriptor(key, raw).map(|d| (key.clone(), d)));

        Ok(Self::build(prefs))
    }

    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_json_value(&value)
    }
}
