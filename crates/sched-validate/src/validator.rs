//! Linting of raw snapshots against a field map.
//!
//! Validation runs directly over the raw records using the configured
//! resolvers, not over normalized output, so it reports exactly what the
//! normalizer would have to default away. It is advisory tooling: the
//! normalizer never consults it and proceeds regardless of the outcome.

use sched_map::{FieldMap, FieldResolver, resolve};
use sched_model::{IssueSeverity, RawRecord, RawSnapshot, ValidationIssue, ValidationReport};
use sched_normalize::coerce;

/// Lints a raw snapshot for per-record structural issues.
///
/// A task without a resolvable `id` is an error; a task without a `name`
/// and a relationship missing either endpoint are warnings. The report is
/// valid iff it carries no error-level issue.
pub fn validate_snapshot(snapshot: &RawSnapshot, field_map: &FieldMap) -> ValidationReport {
    let mut issues = Vec::new();

    for (index, record) in snapshot.tasks.iter().enumerate() {
        let id = resolved_text(record, &field_map.task.id);
        if id.is_none() {
            issues.push(ValidationIssue {
                severity: IssueSeverity::Error,
                message: "Task missing id".to_string(),
                field: Some("id".to_string()),
                record_index: Some(index),
            });
        }
        if resolved_text(record, &field_map.task.name).is_none() {
            let label = id.as_deref().unwrap_or("?");
            issues.push(ValidationIssue {
                severity: IssueSeverity::Warning,
                message: format!("Task {label} missing name"),
                field: Some("name".to_string()),
                record_index: Some(index),
            });
        }
    }

    for (index, record) in snapshot.relationships.iter().enumerate() {
        let source = resolved_text(record, &field_map.rel.source);
        let target = resolved_text(record, &field_map.rel.target);
        if source.is_none() || target.is_none() {
            issues.push(ValidationIssue {
                severity: IssueSeverity::Warning,
                message: "Relationship missing endpoints".to_string(),
                field: None,
                record_index: Some(index),
            });
        }
    }

    ValidationReport { issues }
}

fn resolved_text(record: &RawRecord, resolver: &FieldResolver) -> Option<String> {
    resolve(record, Some(resolver))
        .and_then(|value| coerce::to_text(&value))
        .filter(|text| !text.is_empty())
}
