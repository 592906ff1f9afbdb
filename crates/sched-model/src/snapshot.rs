//! Canonical schedule entities produced by normalization.
//!
//! All entities are immutable value objects constructed fresh on every
//! normalization call. Cross-entity links (`wbs_id`, `source`, `target`,
//! `parent_id`) are referential only: they are resolved by id lookup
//! downstream and never checked for existence here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized task bar.
///
/// `start` and `finish` are epoch milliseconds; `duration` is in days.
/// When a required field cannot be resolved from the raw record the value
/// degrades to an empty string instead of failing the record; the validator
/// reports it separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTask {
    pub id: String,
    pub name: String,
    /// Foreign key into the WBS forest; not required to exist.
    pub wbs_id: String,
    pub start: i64,
    pub finish: i64,
    /// Duration in days, derived from day- or hour-count source fields.
    pub duration: f64,
    /// 0-100 when known; absent means "unknown", never "zero".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<f64>,
    /// Tri-state: on the critical path, not on it, or unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
    /// Predecessor task ids; may reference ids not present in the snapshot.
    pub predecessors: Vec<String>,
    /// Secondary identifier that stays stable across snapshot exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
}

/// A directed precedence constraint between two tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRelationship {
    /// Predecessor task id.
    pub source: String,
    /// Successor task id.
    pub target: String,
    /// Canonical vocabulary is FS, SS, FF, SF; unrecognized trailing tokens
    /// pass through and are an advisory concern for the consumer.
    #[serde(rename = "type")]
    pub rel_type: String,
    /// Lag in hours, signed.
    pub lag: f64,
}

/// A work-breakdown-structure node; `parent_id: None` marks a forest root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedWbs {
    pub id: String,
    pub parent_id: Option<String>,
    pub name: String,
}

/// The canonical output of one normalization call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSnapshot {
    pub tasks: Vec<NormalizedTask>,
    pub wbs: Vec<NormalizedWbs>,
    pub relationships: Vec<NormalizedRelationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}
