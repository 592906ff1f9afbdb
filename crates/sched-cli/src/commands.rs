use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use sched_map::{FieldMap, FieldMapConfig, merge_field_map};
use sched_model::{RawSnapshot, ValidationReport};
use sched_normalize::{NormalizeOptions, normalize_snapshot};
use sched_validate::{validate_snapshot, write_validation_report_json};

use crate::cli::{NormalizeArgs, ValidateArgs};

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let field_map = load_field_map(args.field_map.as_deref())?;
    let options = NormalizeOptions {
        hours_per_day: args.hours_per_day,
    };

    let normalized = normalize_snapshot(&snapshot, &field_map, &options);
    info!(
        tasks = normalized.tasks.len(),
        wbs = normalized.wbs.len(),
        relationships = normalized.relationships.len(),
        "normalization complete"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&normalized)?
    } else {
        serde_json::to_string(&normalized)?
    };
    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote normalized snapshot");
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let field_map = load_field_map(args.field_map.as_deref())?;
    let report = validate_snapshot(&snapshot, &field_map);
    if let Some(dir) = &args.report_dir {
        let path = write_validation_report_json(dir, &report)
            .with_context(|| format!("failed to write report under {}", dir.display()))?;
        info!(path = %path.display(), "wrote validation report");
    }
    Ok(report)
}

fn load_snapshot(path: &Path) -> Result<RawSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    Ok(RawSnapshot::from_value(&value))
}

fn load_field_map(path: Option<&Path>) -> Result<FieldMap> {
    let Some(path) = path else {
        return Ok(merge_field_map(None));
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: FieldMapConfig = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid field-map override", path.display()))?;
    Ok(merge_field_map(Some(&config.into_overrides())))
}
