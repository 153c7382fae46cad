//! Timing for the per-keystroke analysis path
//!
//! Statistics run synchronously on every edit, so the API layer records how
//! long each recompute takes and exposes a summary to the host.

use std::collections::HashMap;

use serde::Serialize;

/// Milliseconds from a monotonic clock
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Milliseconds from a monotonic clock
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static START: Lazy<Instant> = Lazy::new(Instant::now);
    START.elapsed().as_secs_f64() * 1000.0
}

/// Timing summary for one operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationTiming {
    pub operation: String,
    pub samples: usize,
    pub average_ms: f64,
    pub max_ms: f64,
}

/// Running totals for one operation
#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    samples: usize,
    total_ms: f64,
    max_ms: f64,
}

/// Aggregates duration samples per operation in constant space
#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    measurements: HashMap<String, Totals>,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_measurement(&mut self, operation: &str, duration_ms: f64) {
        let totals = self.measurements.entry(operation.to_string()).or_default();
        totals.samples += 1;
        totals.total_ms += duration_ms;
        totals.max_ms = totals.max_ms.max(duration_ms);
    }

    pub fn get_average_time(&self, operation: &str) -> Option<f64> {
        self.measurements.get(operation).map(average)
    }

    /// One entry per operation, sorted by name
    pub fn summary(&self) -> Vec<OperationTiming> {
        let mut out: Vec<OperationTiming> = self
            .measurements
            .iter()
            .map(|(operation, totals)| OperationTiming {
                operation: operation.clone(),
                samples: totals.samples,
                average_ms: average(totals),
                max_ms: totals.max_ms,
            })
            .collect();
        out.sort_by(|a, b| a.operation.cmp(&b.operation));
        out
    }
}

fn average(totals: &Totals) -> f64 {
    if totals.samples == 0 {
        0.0
    } else {
        totals.total_ms / totals.samples as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_and_summary() {
        let mut monitor = PerformanceMonitor::new();
        assert_eq!(monitor.get_average_time("stats"), None);
        monitor.record_measurement("stats", 1.0);
        monitor.record_measurement("stats", 3.0);
        monitor.record_measurement("cursor", 0.5);
        assert_eq!(monitor.get_average_time("stats"), Some(2.0));

        let summary = monitor.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].operation, "cursor");
        assert_eq!(summary[1].samples, 2);
        assert_eq!(summary[1].max_ms, 3.0);
    }

    #[test]
    fn test_many_samples_keep_running_totals() {
        let mut monitor = PerformanceMonitor::new();
        for i in 0..10_000 {
            monitor.record_measurement("setDocumentText", (i % 4) as f64);
        }
        let summary = monitor.summary();
        assert_eq!(summary[0].samples, 10_000);
        assert_eq!(summary[0].max_ms, 3.0);
        assert_eq!(summary[0].average_ms, 1.5);
    }
}
