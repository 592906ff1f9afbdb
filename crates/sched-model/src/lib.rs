pub mod error;
pub mod raw;
pub mod report;
pub mod snapshot;

pub use error::{Result, SchedError};
pub use raw::{RawRecord, RawSnapshot};
pub use report::{IssueSeverity, ValidationIssue, ValidationReport};
pub use snapshot::{
    NormalizedRelationship, NormalizedSnapshot, NormalizedTask, NormalizedWbs,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_report_counts() {
        let report = ValidationReport {
            issues: vec![
                ValidationIssue {
                    severity: IssueSeverity::Error,
                    message: "Task missing id".to_string(),
                    field: Some("id".to_string()),
                    record_index: Some(0),
                },
                ValidationIssue {
                    severity: IssueSeverity::Warning,
                    message: "Task 1 missing name".to_string(),
                    field: Some("name".to_string()),
                    record_index: Some(1),
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.is_valid());
    }

    #[test]
    fn snapshot_serializes() {
        let snapshot = NormalizedSnapshot {
            tasks: vec![NormalizedTask {
                id: "1".to_string(),
                name: "Mobilize".to_string(),
                wbs_id: "W1".to_string(),
                start: 0,
                finish: 0,
                duration: 1.0,
                percent_complete: None,
                critical: Some(true),
                predecessors: vec![],
                activity_id: None,
            }],
            wbs: vec![],
            relationships: vec![],
            metadata: None,
        };
        let json = serde_json::to_value(&snapshot).expect("serialize snapshot");
        assert_eq!(json["tasks"][0]["wbsId"], "W1");
        let round: NormalizedSnapshot =
            serde_json::from_value(json).expect("deserialize snapshot");
        assert_eq!(round.tasks[0].id, "1");
    }
}
