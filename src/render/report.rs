//! Report JSON generation.

use crate::activity::ActivityWindow;
use crate::domain::{ScoredRecord, REPORT_SCHEMA_VERSION};
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

pub fn build_report(
    records: &[ScoredRecord],
    window: &ActivityWindow,
    author_only: bool,
    include_timestamp: bool,
) -> Value {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for scored in records {
        *totals.entry(scored.tier.as_str()).or_default() += 1;
    }

    let entries = records
        .iter()
        .map(|scored| {
            json!({
                "subsystem": scored.record.subsystem,
                "engineers": scored.record.engineers,
                "files": scored.record.files,
                "activity_count": scored.activity_count(),
                "tier": scored.tier.as_str(),
                "color": scored.tier.color(),
            })
        })
        .collect::<Vec<_>>();

    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    if include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert(
        "window".to_string(),
        json!({
            "since": window.since().format("%Y-%m-%d").to_string(),
            "until": window.until().format("%Y-%m-%d").to_string(),
            "days": window.days(),
            "scaling_factor": round_factor(window.scaling_factor()),
            "author_only": author_only,
        }),
    );
    report.insert("totals".to_string(), json!(totals));
    report.insert("subsystems".to_string(), Value::Array(entries));
    Value::Object(report)
}

pub fn write_report(
    report_path: &Path,
    records: &[ScoredRecord],
    window: &ActivityWindow,
    author_only: bool,
    include_timestamp: bool,
) -> Result<()> {
    let report = build_report(records, window, author_only, include_timestamp);
    if let Some(parent) = report_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating directory: {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(&report)?;
    std::fs::write(report_path, content)
        .with_context(|| format!("Failed writing report: {}", report_path.display()))
}

fn round_factor(factor: f64) -> f64 {
    (factor * 1000.0).round() / 1000.0
}
