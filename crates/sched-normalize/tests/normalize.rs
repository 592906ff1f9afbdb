use serde_json::json;

use sched_map::{FieldResolver, TaskResolverOverrides, FieldMapOverrides, merge_field_map};
use sched_model::RawSnapshot;
use sched_normalize::{NormalizeOptions, normalize_compare, normalize_snapshot, CompareInput};

fn sample_snapshot() -> RawSnapshot {
    RawSnapshot::from_value(&json!({
        "tasks": [{
            "task_id": "1",
            "task_name": "Excavate",
            "wbs_id": "W1",
            "act_start_date": "2023-08-02 08:00",
            "act_end_date": "2023-08-03 17:00",
            "task_drtn_days": 1,
            "critical_path": true,
            "predecessors": ["0"]
        }],
        "wbs": [{ "wbs_id": "W1", "wbs_name": "Site works" }],
        "relationships": [{
            "pred_task_id": "0",
            "task_id": "1",
            "pred_type": "PR_FS",
            "lag_hr_cnt": 0
        }],
        "metadata": { "source": "P6" }
    }))
}

#[test]
fn end_to_end_sample_snapshot() {
    let map = merge_field_map(None);
    let normalized = normalize_snapshot(&sample_snapshot(), &map, &NormalizeOptions::default());

    assert_eq!(normalized.tasks.len(), 1);
    let task = &normalized.tasks[0];
    assert_eq!(task.id, "1");
    assert_eq!(task.name, "Excavate");
    assert_eq!(task.duration, 1.0);
    assert_eq!(task.critical, Some(true));
    assert_eq!(task.predecessors, vec!["0"]);
    assert!(task.finish > task.start);

    assert_eq!(normalized.wbs.len(), 1);
    assert_eq!(normalized.wbs[0].parent_id, None);

    assert_eq!(normalized.relationships.len(), 1);
    let rel = &normalized.relationships[0];
    assert_eq!(rel.source, "0");
    assert_eq!(rel.target, "1");
    assert_eq!(rel.rel_type, "FS");
    assert_eq!(rel.lag, 0.0);

    assert_eq!(normalized.metadata, Some(json!({ "source": "P6" })));
}

#[test]
fn normalization_is_idempotent_across_calls() {
    let map = merge_field_map(None);
    let snapshot = sample_snapshot();
    let options = NormalizeOptions::default();
    let first = normalize_snapshot(&snapshot, &map, &options);
    let second = normalize_snapshot(&snapshot, &map, &options);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn start_prefers_actual_over_early_date() {
    let map = merge_field_map(None);
    let snapshot = RawSnapshot::from_value(&json!({
        "tasks": [{
            "task_id": "1",
            "act_start_date": "2023-01-10",
            "early_start_date": "2023-01-01"
        }]
    }));
    let normalized = normalize_snapshot(&snapshot, &map, &NormalizeOptions::default());
    let expected = normalize_snapshot(
        &RawSnapshot::from_value(&json!({
            "tasks": [{ "task_id": "1", "act_start_date": "2023-01-10" }]
        })),
        &map,
        &NormalizeOptions::default(),
    );
    assert_eq!(normalized.tasks[0].start, expected.tasks[0].start);
}

#[test]
fn missing_start_fields_default_to_zero_without_failing() {
    let map = merge_field_map(None);
    let snapshot = RawSnapshot::from_value(&json!({
        "tasks": [{ "task_id": "1", "task_name": "No dates" }]
    }));
    let normalized = normalize_snapshot(&snapshot, &map, &NormalizeOptions::default());
    assert_eq!(normalized.tasks[0].start, 0);
    assert_eq!(normalized.tasks[0].finish, 0);
}

#[test]
fn empty_input_yields_empty_collections() {
    let map = merge_field_map(None);
    let normalized = normalize_snapshot(
        &RawSnapshot::default(),
        &map,
        &NormalizeOptions::default(),
    );
    assert!(normalized.tasks.is_empty());
    assert!(normalized.wbs.is_empty());
    assert!(normalized.relationships.is_empty());
}

#[test]
fn custom_hours_per_day_controls_conversion() {
    let map = merge_field_map(None);
    let snapshot = RawSnapshot::from_value(&json!({
        "tasks": [{ "task_id": "1", "orig_duration_hr_cnt": 24 }]
    }));
    let normalized = normalize_snapshot(
        &snapshot,
        &map,
        &NormalizeOptions { hours_per_day: 12.0 },
    );
    assert_eq!(normalized.tasks[0].duration, 2.0);
}

#[test]
fn overridden_resolver_feeds_normalization() {
    let overrides = FieldMapOverrides {
        task: Some(TaskResolverOverrides {
            id: Some(FieldResolver::candidates(["uid"])),
            ..TaskResolverOverrides::default()
        }),
        ..FieldMapOverrides::default()
    };
    let map = merge_field_map(Some(&overrides));
    let snapshot = RawSnapshot::from_value(&json!({
        "tasks": [{ "uid": "A-7", "task_name": "Survey" }]
    }));
    let normalized = normalize_snapshot(&snapshot, &map, &NormalizeOptions::default());
    assert_eq!(normalized.tasks[0].id, "A-7");
    assert_eq!(normalized.tasks[0].name, "Survey");
}

#[test]
fn custom_function_resolver_runs_against_the_record() {
    let overrides = FieldMapOverrides {
        task: Some(TaskResolverOverrides {
            name: Some(FieldResolver::custom(|record| {
                let code = record.get("code")?.as_str()?;
                let label = record.get("label")?.as_str()?;
                Some(json!(format!("{code} {label}")))
            })),
            ..TaskResolverOverrides::default()
        }),
        ..FieldMapOverrides::default()
    };
    let map = merge_field_map(Some(&overrides));
    let snapshot = RawSnapshot::from_value(&json!({
        "tasks": [{ "task_id": "1", "code": "A100", "label": "Mobilize" }]
    }));
    let normalized = normalize_snapshot(&snapshot, &map, &NormalizeOptions::default());
    assert_eq!(normalized.tasks[0].name, "A100 Mobilize");
}

#[test]
fn compare_pair_normalizes_both_sides_with_one_map() {
    let map = merge_field_map(None);
    let input = CompareInput {
        baseline: sample_snapshot(),
        update: RawSnapshot::from_value(&json!({
            "tasks": [{ "task_id": "9", "activity_id": "A100" }]
        })),
    };
    let pair = normalize_compare(&input, &map, &NormalizeOptions::default());
    assert_eq!(pair.baseline.tasks[0].id, "1");
    assert_eq!(pair.update.tasks[0].activity_id, Some("A100".to_string()));
}
