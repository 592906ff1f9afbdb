use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A structural issue found while linting a raw snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity level.
    pub severity: IssueSeverity,
    /// Human-readable message describing the issue.
    pub message: String,
    /// Canonical field name (if applicable).
    pub field: Option<String>,
    /// Index of the offending record within its collection.
    pub record_index: Option<usize>,
}

/// Advisory validation report for one raw snapshot.
///
/// Warnings never invalidate; normalization proceeds regardless of the
/// outcome reported here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}
