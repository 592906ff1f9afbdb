//! Per-entity normalizers: raw record collections in, canonical entities
//! out. Record order is preserved and no cross-record validation happens
//! here; the validator reports structural problems separately.

use tracing::trace;

use sched_map::{FieldResolver, RelationshipResolvers, TaskResolvers, WbsResolvers, resolve};
use sched_model::{NormalizedRelationship, NormalizedTask, NormalizedWbs, RawRecord};

use crate::NormalizeOptions;
use crate::coerce;
use crate::rel_type::canonical_rel_type;

/// Normalizes task records.
///
/// Required fields that fail to resolve degrade to empty strings or zeroed
/// dates instead of failing the record. `finish` falls back to the resolved
/// `start`, and `duration` prefers a day-count field over an hour-count
/// field divided by `hours_per_day`.
pub fn normalize_tasks(
    records: &[RawRecord],
    resolvers: &TaskResolvers,
    options: &NormalizeOptions,
) -> Vec<NormalizedTask> {
    records
        .iter()
        .map(|record| normalize_task(record, resolvers, options))
        .collect()
}

fn normalize_task(
    record: &RawRecord,
    resolvers: &TaskResolvers,
    options: &NormalizeOptions,
) -> NormalizedTask {
    let id = resolved_text(record, Some(&resolvers.id));
    if id.is_empty() {
        trace!("task record resolved without an id");
    }
    let start = resolved_date(record, Some(&resolvers.start)).unwrap_or(0);
    let finish = resolved_date(record, Some(&resolvers.finish)).unwrap_or(start);

    let day_count = resolved_number(record, resolvers.duration_days.as_ref());
    let hour_count = resolved_number(record, resolvers.duration_hours.as_ref());
    let duration = match (day_count, hour_count) {
        (Some(days), _) => days,
        (None, Some(hours)) => hours / options.hours_per_day,
        (None, None) => 0.0,
    };

    let critical =
        resolve(record, resolvers.critical.as_ref()).map(|value| coerce::to_flag(&value));
    let predecessors = resolve(record, resolvers.predecessors.as_ref())
        .map(|value| coerce::to_id_list(&value))
        .unwrap_or_default();

    NormalizedTask {
        id,
        name: resolved_text(record, Some(&resolvers.name)),
        wbs_id: resolved_text(record, Some(&resolvers.wbs_id)),
        start,
        finish,
        duration,
        percent_complete: resolved_number(record, resolvers.percent_complete.as_ref()),
        critical,
        predecessors,
        activity_id: resolve(record, resolvers.activity_id.as_ref())
            .and_then(|value| coerce::to_text(&value)),
    }
}

/// Normalizes relationship records; the raw type code is canonicalized and
/// lag defaults to zero hours.
pub fn normalize_relationships(
    records: &[RawRecord],
    resolvers: &RelationshipResolvers,
) -> Vec<NormalizedRelationship> {
    records
        .iter()
        .map(|record| {
            let raw_type = resolved_text(record, Some(&resolvers.rel_type));
            NormalizedRelationship {
                source: resolved_text(record, Some(&resolvers.source)),
                target: resolved_text(record, Some(&resolvers.target)),
                rel_type: canonical_rel_type(&raw_type).to_string(),
                lag: resolved_number(record, resolvers.lag_hours.as_ref()).unwrap_or(0.0),
            }
        })
        .collect()
}

/// Normalizes WBS records; a missing parent marks a forest root.
pub fn normalize_wbs(records: &[RawRecord], resolvers: &WbsResolvers) -> Vec<NormalizedWbs> {
    records
        .iter()
        .map(|record| NormalizedWbs {
            id: resolved_text(record, Some(&resolvers.id)),
            parent_id: resolve(record, resolvers.parent_id.as_ref())
                .and_then(|value| coerce::to_text(&value)),
            name: resolved_text(record, Some(&resolvers.name)),
        })
        .collect()
}

fn resolved_text(record: &RawRecord, resolver: Option<&FieldResolver>) -> String {
    resolve(record, resolver)
        .and_then(|value| coerce::to_text(&value))
        .unwrap_or_default()
}

fn resolved_number(record: &RawRecord, resolver: Option<&FieldResolver>) -> Option<f64> {
    resolve(record, resolver).and_then(|value| coerce::to_number(&value))
}

fn resolved_date(record: &RawRecord, resolver: Option<&FieldResolver>) -> Option<i64> {
    resolve(record, resolver).and_then(|value| coerce::parse_date(&value))
}
