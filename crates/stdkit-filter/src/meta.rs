//! Key/value annotations attachable to rule nodes.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// Ordered string-keyed annotation store.
///
/// Every [`Rule`](crate::Rule) node can carry one. The filter core never
/// reads it; consumers such as query renderers use it to stash hints on
/// individual nodes. Keys keep their insertion order.
///
/// # Example
///
/// ```
/// use stdkit_filter::Condition;
/// use serde_json::json;
///
/// let mut condition = Condition::equal("host", "web-1");
/// assert!(condition.meta().is_none());
///
/// condition.meta_data().set("generated", json!(true));
/// assert!(condition.meta().unwrap().has("generated"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetaData {
    data: Map<String, JsonValue>,
}

impl MetaData {
    /// Creates an empty store.
    pub fn new() -> Self {
        MetaData::default()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if an entry named `name` exists.
    pub fn has(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Returns the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.data.get(name)
    }

    /// Returns the value stored under `name`, or `default` if there is none.
    pub fn get_or(&self, name: &str, default: JsonValue) -> JsonValue {
        self.data.get(name).cloned().unwrap_or(default)
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> &mut Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Copies every entry of `other` into this store.
    ///
    /// Entries of `other` win on conflicting keys.
    pub fn merge(&mut self, other: &MetaData) -> &mut Self {
        for (name, value) in &other.data {
            self.data.insert(name.clone(), value.clone());
        }
        self
    }

    /// Removes all entries.
    pub fn clear(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }
}
