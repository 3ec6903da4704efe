// ==========================================
// Spool Winding Production System - Production Entry Entity
// ==========================================
// One row per supervisor/shift/day submission.
// Aligned with the winding_daily table.
// ==========================================

use crate::domain::types::{Shift, Zone};
use crate::engine::metrics::DerivedMetrics;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionEntry - persisted row
// ==========================================
// Append-only: never updated or deleted by the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionEntry {
    // ===== Identity =====
    pub id: i64, // auto-increment rowid

    // ===== Submission context =====
    pub zone: Zone,
    pub entry_date: NaiveDate,
    pub shift: Shift,
    pub supervisor_name: String, // non-empty, trimmed

    // ===== Quality & machine details =====
    pub quality: f64,   // nominal yarn quality/count designation
    pub avg_count: f64, // must match quality within 0.01 (historical column)
    pub spindle: i64,   // positive, no upper bound
    pub no_of_frame: i64,
    pub no_of_winder: i64,

    // ===== Production (kg) =====
    pub target_prod: i64,
    pub actual_prod: i64,

    // ===== Derived, stored denormalized =====
    pub kg_per_frame: i64,
    pub kg_per_winder: i64,
    pub diff: i64, // actual - target, may be negative

    // ===== Server-assigned =====
    pub created_at: NaiveDateTime, // immutable
}

// ==========================================
// EntryDraft - raw form input
// ==========================================
// Pre-validation, pre-derivation shape of a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDraft {
    pub zone: Zone,
    pub entry_date: NaiveDate,
    pub shift: Shift,
    pub supervisor_name: String,
    pub quality: f64,
    pub avg_count: f64,
    pub spindle: i64,
    pub no_of_frame: i64,
    pub no_of_winder: i64,
    pub target_prod: i64,
    pub actual_prod: i64,
}

// ==========================================
// NewProductionEntry - validated row ready for insert
// ==========================================
// id / created_at are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductionEntry {
    pub zone: Zone,
    pub entry_date: NaiveDate,
    pub shift: Shift,
    pub supervisor_name: String,
    pub quality: f64,
    pub avg_count: f64,
    pub spindle: i64,
    pub no_of_frame: i64,
    pub no_of_winder: i64,
    pub target_prod: i64,
    pub actual_prod: i64,
    pub kg_per_frame: i64,
    pub kg_per_winder: i64,
    pub diff: i64,
}

impl NewProductionEntry {
    /// Combine a validated draft with its derived metrics
    ///
    /// The supervisor name is stored trimmed.
    pub fn from_draft(draft: &EntryDraft, metrics: DerivedMetrics) -> Self {
        Self {
            zone: draft.zone,
            entry_date: draft.entry_date,
            shift: draft.shift,
            supervisor_name: draft.supervisor_name.trim().to_string(),
            quality: draft.quality,
            avg_count: draft.avg_count,
            spindle: draft.spindle,
            no_of_frame: draft.no_of_frame,
            no_of_winder: draft.no_of_winder,
            target_prod: draft.target_prod,
            actual_prod: draft.actual_prod,
            kg_per_frame: metrics.kg_per_frame,
            kg_per_winder: metrics.kg_per_winder,
            diff: metrics.diff,
        }
    }
}
