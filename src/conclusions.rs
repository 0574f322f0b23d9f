//! Heuristic conclusions for the report.
//!
//! A small, fixed rule set over the derived metrics. Rules evaluate
//! independently in a fixed order and are not mutually exclusive; a
//! rule whose input metric is unavailable is suppressed.

use crate::metrics::DerivedMetrics;

/// Thresholds above or below which a heuristic rule fires.
#[derive(Debug, Clone)]
pub struct Thresholds {
    /// IPC below this suggests stalled execution.
    pub ipc_low: f64,
    /// Branch miss rate (as a fraction) above this suggests a
    /// control-flow bottleneck.
    pub branch_miss_rate: f64,
    /// L1 data-cache MPKI above this suggests poor data locality.
    pub l1d_mpki: f64,
    /// Last-level-cache MPKI above this suggests frequent cross-tier
    /// accesses.
    pub llc_mpki: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ipc_low: 1.0,
            branch_miss_rate: 0.03,
            l1d_mpki: 5.0,
            llc_mpki: 1.0,
        }
    }
}

/// Conclusion emitted when no heuristic rule fires.
pub const FALLBACK: &str = "Metrics show no obvious anomaly; follow up with flame graphs \
     or sampling profiles to confirm hotspots.";

/// Apply the heuristic rules to the derived metrics.
///
/// Returns at least one line: either the rules that fired, in order, or
/// the single [`FALLBACK`] recommendation.
pub fn annotate(metrics: &DerivedMetrics, thresholds: &Thresholds) -> Vec<String> {
    let mut conclusions = Vec::new();

    if let Some(ipc) = metrics.ipc {
        if ipc < thresholds.ipc_low {
            conclusions.push(
                "IPC is low; execution may be limited by branches, cache misses, \
                 or data dependencies."
                    .to_string(),
            );
        }
    }

    if let Some(rate) = metrics.branch_miss_rate {
        if rate > thresholds.branch_miss_rate {
            conclusions.push(
                "Branch misprediction rate is high; control flow may be a primary \
                 bottleneck."
                    .to_string(),
            );
        }
    }

    if let Some(l1d) = metrics.l1d_mpki {
        if l1d > thresholds.l1d_mpki {
            conclusions.push("L1D MPKI is high; data locality may be insufficient.".to_string());
        }
    }

    if let Some(llc) = metrics.llc_mpki {
        if llc > thresholds.llc_mpki {
            conclusions.push(
                "LLC MPKI is high; the workload may be making frequent cross-tier \
                 memory accesses."
                    .to_string(),
            );
        }
    }

    if conclusions.is_empty() {
        conclusions.push(FALLBACK.to_string());
    }

    conclusions
}
