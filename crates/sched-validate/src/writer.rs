use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use sched_model::{Result, ValidationIssue, ValidationReport};

pub const REPORT_SCHEMA: &str = "schedule-normalizer.validation-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct ValidationReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    valid: bool,
    error_count: usize,
    warning_count: usize,
    issues: &'a [ValidationIssue],
}

/// Writes the validation report as versioned JSON under `output_dir`.
pub fn write_validation_report_json(
    output_dir: &Path,
    report: &ValidationReport,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        valid: report.is_valid(),
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        issues: &report.issues,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
