// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # perf-doctor
//!
//! A library and CLI for turning raw CPU performance-counter captures
//! into readable markdown reports.
//!
//! Given the CSV output of a hardware-counter capture plus auxiliary
//! system/benchmark text, perf-doctor derives throughput and cache
//! metrics (IPC, CPI, miss rates, MPKI), applies a small set of
//! heuristic rules, and renders everything into a fixed-structure
//! markdown document.
//!
//! ## Architecture
//!
//! The pipeline is linear and fully synchronous:
//!
//! ```text
//! counter CSV ──▶ events ──▶ metrics ──▶ conclusions ──▶ report ──▶ file
//!                (parse)    (derive)     (annotate)      (render)
//! ```
//!
//! - **[`events`]**: tolerant CSV parsing into an [`EventMap`]; counter
//!   values the kernel could not measure degrade to unavailable
//! - **[`metrics`]**: pure derivation of IPC, CPI, miss rates, and MPKI
//!   figures, propagating unavailability through every ratio
//! - **[`format`]**: fixed-precision display formatting with `N/A` for
//!   missing values
//! - **[`conclusions`]**: fixed threshold heuristics flagging likely
//!   bottlenecks
//! - **[`report`]**: markdown assembly and file output
//!
//! ## Usage
//!
//! ```
//! use perf_doctor::{annotate, DerivedMetrics, EventMap, Report, Thresholds};
//!
//! let events = EventMap::parse("1000000,,instructions\n2000000,,cycles\n");
//! let metrics = DerivedMetrics::from_events(&events);
//!
//! let report = Report {
//!     system_info: "CPU: 8 cores".to_string(),
//!     workload: perf_doctor::workload_lines(None, 100_000, 20),
//!     bench_output: "ops/sec: 1234567".to_string(),
//!     conclusions: annotate(&metrics, &Thresholds::default()),
//!     metrics: metrics.table(),
//! };
//! let markdown = report.render();
//! assert!(markdown.contains("| IPC | 0.500 | instructions per cycle |"));
//! ```

pub mod conclusions;
pub mod events;
pub mod format;
pub mod metrics;
pub mod report;

// Re-export main types for convenience
pub use conclusions::{annotate, Thresholds};
pub use events::{CounterValue, EventMap};
pub use format::{fmt, fmt_digits};
pub use metrics::{mpki, ratio, DerivedMetrics, MetricRow};
pub use report::{workload_lines, Report};
