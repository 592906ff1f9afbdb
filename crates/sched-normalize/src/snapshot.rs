//! Snapshot-level orchestration over the three entity normalizers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sched_map::FieldMap;
use sched_model::{NormalizedSnapshot, RawSnapshot};

use crate::NormalizeOptions;
use crate::entities::{normalize_relationships, normalize_tasks, normalize_wbs};

/// Normalizes one raw snapshot into the canonical model.
///
/// Pure and total: absent top-level collections were already defaulted to
/// empty by `RawSnapshot`, metadata passes through unchanged, and only a
/// panicking custom resolver can abort the call.
pub fn normalize_snapshot(
    snapshot: &RawSnapshot,
    field_map: &FieldMap,
    options: &NormalizeOptions,
) -> NormalizedSnapshot {
    let tasks = normalize_tasks(&snapshot.tasks, &field_map.task, options);
    let wbs = normalize_wbs(&snapshot.wbs, &field_map.wbs);
    let relationships = normalize_relationships(&snapshot.relationships, &field_map.rel);
    debug!(
        tasks = tasks.len(),
        wbs = wbs.len(),
        relationships = relationships.len(),
        "normalized snapshot"
    );
    NormalizedSnapshot {
        tasks,
        wbs,
        relationships,
        metadata: snapshot.metadata.clone(),
    }
}

/// A baseline/update pair of raw snapshots from the same schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareInput {
    pub baseline: RawSnapshot,
    pub update: RawSnapshot,
}

/// Both members of a compare pair, normalized with the same configuration.
///
/// Consumers match tasks across the pair by `activity_id` when primary ids
/// differ between exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparePair {
    pub baseline: NormalizedSnapshot,
    pub update: NormalizedSnapshot,
}

pub fn normalize_compare(
    input: &CompareInput,
    field_map: &FieldMap,
    options: &NormalizeOptions,
) -> ComparePair {
    ComparePair {
        baseline: normalize_snapshot(&input.baseline, field_map, options),
        update: normalize_snapshot(&input.update, field_map, options),
    }
}
