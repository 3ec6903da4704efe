// ==========================================
// Spool Winding Production System - Engine Layer
// ==========================================
// Business rules only; engines never touch SQL.
// ==========================================

pub mod metrics;
pub mod weekly;

// Re-export core engines
pub use metrics::{DerivedMetrics, MetricsDeriver, MetricsError};
pub use weekly::WeeklyAggregator;
