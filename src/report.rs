//! Markdown report assembly and output.
//!
//! Merges the system description, workload lines, benchmark output,
//! metric table, and conclusions into a fixed-structure markdown
//! document and writes it to disk.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::metrics::MetricRow;

/// Default warm-up/active-order/price-level figures used when no
/// explicit workload description is given.
const DEFAULT_SHAPE: &str = "warm-up orders: 20000, max active orders: 50000, price levels: 2000";

/// Build the workload section lines.
///
/// A non-empty `description` is split into its non-blank trimmed lines.
/// Otherwise three templated default lines are built from the operation
/// count and trade percentage.
pub fn workload_lines(description: Option<&str>, ops: u64, trade: u64) -> Vec<String> {
    match description {
        Some(text) if !text.trim().is_empty() => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        _ => vec![
            format!("add/delete split evenly, trade share {trade}%"),
            format!("operations per iteration: {ops}"),
            DEFAULT_SHAPE.to_string(),
        ],
    }
}

/// A fully assembled report, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub system_info: String,
    pub workload: Vec<String>,
    pub bench_output: String,
    pub metrics: Vec<MetricRow>,
    pub conclusions: Vec<String>,
}

impl Report {
    /// Render the report as a markdown document.
    ///
    /// Section order is fixed: test environment, workload, benchmark
    /// output, metric table, conclusions.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("# Benchmark Performance Report\n\n");

        out.push_str("## Test Environment\n\n```\n");
        out.push_str(self.system_info.trim());
        out.push_str("\n```\n\n");

        out.push_str("## Workload\n\n");
        for line in &self.workload {
            let _ = writeln!(out, "- {line}");
        }
        out.push('\n');

        out.push_str("## Benchmark Output\n\n```\n");
        out.push_str(self.bench_output.trim());
        out.push_str("\n```\n\n");

        out.push_str("## Performance Metrics\n\n");
        out.push_str("| Metric | Value | Note |\n");
        out.push_str("|---|---:|---|\n");
        for row in &self.metrics {
            let _ = writeln!(out, "| {} | {} | {} |", row.name, row.value, row.note);
        }
        out.push('\n');

        out.push_str("## Conclusions\n\n");
        for conclusion in &self.conclusions {
            let _ = writeln!(out, "- {conclusion}");
        }

        out
    }

    /// Render and write the report, overwriting any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
        Ok(())
    }

    /// Write the full report, including the metric table and
    /// conclusions, as pretty-printed JSON.
    pub fn export_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write export to {}", path.display()))?;
        info!(path = %path.display(), "metrics exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conclusions::{annotate, Thresholds};
    use crate::events::EventMap;
    use crate::metrics::DerivedMetrics;

    fn sample_report() -> Report {
        let events = EventMap::parse("1000000,,instructions\n2000000,,cycles\n");
        let metrics = DerivedMetrics::from_events(&events);
        Report {
            system_info: "CPU: 8 cores\nRAM: 32 GiB\n".to_string(),
            workload: workload_lines(None, 100_000, 20),
            bench_output: "ops/sec: 1234567\n".to_string(),
            conclusions: annotate(&metrics, &Thresholds::default()),
            metrics: metrics.table(),
        }
    }

    #[test]
    fn test_default_workload_lines() {
        let lines = workload_lines(None, 100_000, 20);
        assert_eq!(
            lines,
            vec![
                "add/delete split evenly, trade share 20%".to_string(),
                "operations per iteration: 100000".to_string(),
                DEFAULT_SHAPE.to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_workload_falls_back_to_default() {
        assert_eq!(workload_lines(Some("   \n  "), 500, 10), workload_lines(None, 500, 10));
    }

    #[test]
    fn test_explicit_workload_lines_trimmed() {
        let lines = workload_lines(Some("  first line \n\n second line\n"), 1, 1);
        assert_eq!(lines, vec!["first line".to_string(), "second line".to_string()]);
    }

    #[test]
    fn test_render_section_order() {
        let markdown = sample_report().render();
        let env = markdown.find("## Test Environment").unwrap();
        let workload = markdown.find("## Workload").unwrap();
        let bench = markdown.find("## Benchmark Output").unwrap();
        let metrics = markdown.find("## Performance Metrics").unwrap();
        let conclusions = markdown.find("## Conclusions").unwrap();
        assert!(env < workload && workload < bench && bench < metrics && metrics < conclusions);
    }

    #[test]
    fn test_render_end_to_end_values() {
        let markdown = sample_report().render();
        assert!(markdown.contains("| IPC | 0.500 | instructions per cycle |"));
        assert!(markdown.contains("| CPI | 2.000 | cycles per instruction |"));
        // IPC 0.5 < 1.0 is the only rule with available inputs
        assert!(markdown.contains("- IPC is low"));
        assert!(!markdown.contains(crate::conclusions::FALLBACK));
    }

    #[test]
    fn test_render_fences_auxiliary_text() {
        let markdown = sample_report().render();
        assert!(markdown.contains("```\nCPU: 8 cores\nRAM: 32 GiB\n```"));
        assert!(markdown.contains("```\nops/sec: 1234567\n```"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "old contents").unwrap();

        sample_report().write(file.path()).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.starts_with("# Benchmark Performance Report"));
        assert!(!written.contains("old contents"));
    }

    #[test]
    fn test_export_json_round_trips_rows() {
        let file = tempfile::NamedTempFile::new().unwrap();
        sample_report().export_json(file.path()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(json["metrics"].as_array().unwrap().len(), 11);
        assert_eq!(json["metrics"][2]["name"], "IPC");
        assert_eq!(json["metrics"][2]["value"], "0.500");
        assert!(json["conclusions"][0].as_str().unwrap().starts_with("IPC is low"));
        // The export carries the full report structure
        assert!(json["system_info"].as_str().unwrap().contains("CPU: 8 cores"));
        assert_eq!(json["workload"].as_array().unwrap().len(), 3);
    }
}
