// ==========================================
// Spool Winding Production System - Report Row Types
// ==========================================
// Pure views over a weekly window of ProductionEntry rows.
// Computed on demand, never persisted.
// ==========================================

use crate::domain::types::Zone;
use serde::{Deserialize, Serialize};

// ==========================================
// ZoneQualityComparison - report 1 row
// ==========================================
// Current-week means per (zone, quality) against the previous
// week of the same calendar year. A group absent from the
// previous week reports 0.0 as its baseline (documented
// limitation: absence is conflated with zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneQualityComparison {
    pub zone: Zone,
    pub quality: f64,

    // ===== Current week (mean, rounded to 2 decimals) =====
    pub kg_frame: f64,
    pub kg_winder: f64,

    // ===== Previous week (0.0 when no data) =====
    pub prev_kg_frame: f64,
    pub prev_kg_winder: f64,

    // ===== Current minus previous =====
    pub diff_kg_frame: f64,
    pub diff_kg_winder: f64,
}

// ==========================================
// ZoneSupervisorReport - report 2 row
// ==========================================
// Current-week aggregates per (zone, supervisor, quality).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSupervisorReport {
    pub zone: Zone,
    pub supervisor_name: String,
    pub quality: f64,

    /// Sum of no_of_frame over the group ("machines" on the report)
    pub machines: i64,

    // ===== Means, rounded to 2 decimals =====
    pub kg_frame: f64,
    pub kg_winder: f64,

    /// Sum of per-entry diff (actual - target) over the group
    pub difference: i64,
}
