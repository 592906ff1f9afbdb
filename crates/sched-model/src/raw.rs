//! Raw, vendor-shaped input as a generic decoded value tree.
//!
//! Source systems export schedules with vendor-specific field names and
//! mixed value encodings. A raw record is an open key/value container over
//! the closed set of JSON value variants; field resolution happens later
//! against a configured field map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One raw record with unknown, vendor-specific field names.
pub type RawRecord = Map<String, Value>;

/// One complete exported schedule state before normalization.
///
/// All three collections are optional in the wire shape and default to
/// empty. `metadata` is carried through opaquely and never interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSnapshot {
    #[serde(default)]
    pub tasks: Vec<RawRecord>,
    #[serde(default)]
    pub wbs: Vec<RawRecord>,
    #[serde(default)]
    pub relationships: Vec<RawRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl RawSnapshot {
    /// Builds a snapshot from an arbitrary decoded value.
    ///
    /// Missing keys, non-array collections, and non-object entries are
    /// tolerated and degrade to empty collections rather than failing.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            tasks: records_from(object.get("tasks")),
            wbs: records_from(object.get("wbs")),
            relationships: records_from(object.get("relationships")),
            metadata: object.get("metadata").cloned(),
        }
    }
}

fn records_from(value: Option<&Value>) -> Vec<RawRecord> {
    match value.and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .filter_map(|entry| entry.as_object().cloned())
            .collect(),
        None => Vec::new(),
    }
}
