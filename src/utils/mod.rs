//! Utility modules

pub mod performance;

pub use performance::{now_ms, OperationTiming, PerformanceMonitor};
