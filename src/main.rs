// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod conclusions;
mod events;
mod format;
mod metrics;
mod report;

use conclusions::{annotate, Thresholds};
use events::EventMap;
use metrics::DerivedMetrics;
use report::{workload_lines, Report};

#[derive(Parser, Debug)]
#[command(name = "perf-doctor")]
#[command(about = "Generate a markdown report from a CPU performance-counter capture")]
struct Args {
    /// Path to the counter capture CSV (perf stat -x, output)
    #[arg(long)]
    perf: PathBuf,

    /// Path to a text file describing the test system
    #[arg(long)]
    system: PathBuf,

    /// Path to the benchmark's textual output
    #[arg(long)]
    bench: PathBuf,

    /// Operations per benchmark iteration
    #[arg(long)]
    ops: u64,

    /// Trade share of the workload, in percent
    #[arg(long)]
    trade: u64,

    /// Multi-line workload description (defaults to a template built
    /// from --ops and --trade)
    #[arg(long)]
    workload: Option<String>,

    /// Output path for the markdown report
    #[arg(long)]
    out: PathBuf,

    /// Also export the metric table and conclusions as JSON
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let events = EventMap::load(&args.perf)?;
    info!(events = events.len(), capture = %args.perf.display(), "parsed counter capture");

    let metrics = DerivedMetrics::from_events(&events);
    let conclusions = annotate(&metrics, &Thresholds::default());

    let system_info = fs::read_to_string(&args.system)
        .with_context(|| format!("failed to read system info {}", args.system.display()))?;
    let bench_output = fs::read_to_string(&args.bench)
        .with_context(|| format!("failed to read benchmark output {}", args.bench.display()))?;

    let report = Report {
        system_info,
        workload: workload_lines(args.workload.as_deref(), args.ops, args.trade),
        bench_output,
        metrics: metrics.table(),
        conclusions,
    };

    report.write(&args.out)?;

    if let Some(ref export_path) = args.export {
        report.export_json(export_path)?;
    }

    Ok(())
}
