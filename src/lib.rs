// ==========================================
// Spool Winding Production System - Core Library
// ==========================================
// Daily production entry + weekly management reporting
// for a textile mill winding department.
// Stack: Rust + SQLite
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Engine layer - business rules
pub mod engine;

// Export layer - CSV table snapshots
pub mod export;

// Report layer - table rendering
pub mod report;

// Notification layer - outbound mail
pub mod notify;

// Configuration layer
pub mod config;

// Database infrastructure (connection init / unified PRAGMA)
pub mod db;

// Logging
pub mod logging;

// API layer - business operations
pub mod api;

// Application layer - wiring
pub mod app;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain types
pub use domain::types::{Shift, Zone};

// Domain entities
pub use domain::{
    EntryDraft, NewProductionEntry, ProductionEntry, ZoneQualityComparison, ZoneSupervisorReport,
};

// Engines
pub use engine::{DerivedMetrics, MetricsDeriver, MetricsError, WeeklyAggregator};

// API
pub use api::{EntryApi, ReportApi};

// Application
pub use app::AppState;
pub use config::AppConfig;

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Spool Winding Production System";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
