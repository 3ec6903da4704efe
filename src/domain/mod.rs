// ==========================================
// Spool Winding Production System - Domain Layer
// ==========================================
// Entities and value types only; no I/O, no SQL.
// ==========================================

pub mod entry;
pub mod report;
pub mod types;

// Re-export core entities
pub use entry::{EntryDraft, NewProductionEntry, ProductionEntry};
pub use report::{ZoneQualityComparison, ZoneSupervisorReport};
pub use types::{Shift, Zone};
