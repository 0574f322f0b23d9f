//! Derived metric computation.
//!
//! Transforms the raw event map into display-ready derived metrics:
//! IPC, CPI, miss rates, and misses-per-kilo-instruction figures. All
//! arithmetic propagates unavailability - a ratio over a missing or
//! zero denominator is simply `None`, never an error.

use serde::Serialize;

use crate::events::EventMap;
use crate::format::fmt;

/// Ratio of two optional quantities.
///
/// `None` if the numerator is unavailable or the denominator is
/// unavailable or zero.
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// Misses per thousand instructions, under the same unavailability
/// rule as [`ratio`].
pub fn mpki(misses: Option<f64>, instructions: Option<f64>) -> Option<f64> {
    ratio(misses, instructions).map(|r| 1000.0 * r)
}

/// One row of the rendered metric table.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub name: &'static str,
    pub value: String,
    pub note: &'static str,
}

/// Metrics derived from a counter capture.
///
/// Every field is optional: a metric whose inputs were not counted is
/// carried as `None` and rendered as `N/A`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DerivedMetrics {
    pub instructions: Option<f64>,
    pub cycles: Option<f64>,
    pub ipc: Option<f64>,
    pub cpi: Option<f64>,
    pub branch_miss_rate: Option<f64>,
    pub cache_miss_rate: Option<f64>,
    pub l1d_mpki: Option<f64>,
    pub l1i_mpki: Option<f64>,
    pub llc_mpki: Option<f64>,
    pub dtlb_mpki: Option<f64>,
    pub itlb_mpki: Option<f64>,
}

impl DerivedMetrics {
    /// Derive all metrics from the well-known perf event names.
    pub fn from_events(events: &EventMap) -> Self {
        let cycles = events.value("cycles");
        let instructions = events.value("instructions");
        let branches = events.value("branches");
        let branch_misses = events.value("branch-misses");
        let cache_refs = events.value("cache-references");
        let cache_misses = events.value("cache-misses");

        let l1d_miss = events.value("L1-dcache-load-misses");
        let l1i_miss = events.value("L1-icache-load-misses");
        let llc_miss = events.value("LLC-load-misses");
        let dtlb_miss = events.value("dTLB-load-misses");
        let itlb_miss = events.value("iTLB-load-misses");

        Self {
            instructions,
            cycles,
            ipc: ratio(instructions, cycles),
            cpi: ratio(cycles, instructions),
            branch_miss_rate: ratio(branch_misses, branches),
            cache_miss_rate: ratio(cache_misses, cache_refs),
            l1d_mpki: mpki(l1d_miss, instructions),
            l1i_mpki: mpki(l1i_miss, instructions),
            llc_mpki: mpki(llc_miss, instructions),
            dtlb_mpki: mpki(dtlb_miss, instructions),
            itlb_mpki: mpki(itlb_miss, instructions),
        }
    }

    /// The fixed 11-row metric table, formatted for display.
    ///
    /// Rate metrics are scaled to percentages before formatting.
    pub fn table(&self) -> Vec<MetricRow> {
        let pct = |v: Option<f64>| v.map(|r| r * 100.0);

        vec![
            MetricRow {
                name: "Instructions",
                value: fmt(self.instructions, ""),
                note: "retired instructions",
            },
            MetricRow {
                name: "Cycles",
                value: fmt(self.cycles, ""),
                note: "CPU cycles",
            },
            MetricRow {
                name: "IPC",
                value: fmt(self.ipc, ""),
                note: "instructions per cycle",
            },
            MetricRow {
                name: "CPI",
                value: fmt(self.cpi, ""),
                note: "cycles per instruction",
            },
            MetricRow {
                name: "Branch miss rate",
                value: fmt(pct(self.branch_miss_rate), "%"),
                note: "branch-misses / branches",
            },
            MetricRow {
                name: "Cache miss rate",
                value: fmt(pct(self.cache_miss_rate), "%"),
                note: "cache-misses / cache-references",
            },
            MetricRow {
                name: "L1D MPKI",
                value: fmt(self.l1d_mpki, ""),
                note: "L1-dcache-load-misses per 1K instr",
            },
            MetricRow {
                name: "L1I MPKI",
                value: fmt(self.l1i_mpki, ""),
                note: "L1-icache-load-misses per 1K instr",
            },
            MetricRow {
                name: "LLC MPKI",
                value: fmt(self.llc_mpki, ""),
                note: "LLC-load-misses per 1K instr",
            },
            MetricRow {
                name: "dTLB MPKI",
                value: fmt(self.dtlb_mpki, ""),
                note: "dTLB-load-misses per 1K instr",
            },
            MetricRow {
                name: "iTLB MPKI",
                value: fmt(self.itlb_mpki, ""),
                note: "iTLB-load-misses per 1K instr",
            },
        ]
    }
}
