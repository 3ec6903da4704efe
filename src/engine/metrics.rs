// ==========================================
// Spool Winding Production System - Metrics Deriver
// ==========================================
// Per-entry derived fields computed at submission time and
// stored denormalized on the row.
//
// Rounding: f64::round, i.e. half away from zero. 52.5 kg/frame
// rounds to 53. The stored values are user-visible, so the rule
// must stay consistent across all entry points.
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Metrics derivation error
///
/// A zero machine count is a validation problem, not a runtime
/// fault: callers must surface it to the user and persist nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("cannot derive per-machine output: {field} is zero")]
    ZeroDivisor { field: &'static str },
}

/// Derived per-entry fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub kg_per_frame: i64,
    pub kg_per_winder: i64,
    pub diff: i64,
}

// ==========================================
// MetricsDeriver
// ==========================================
pub struct MetricsDeriver;

impl MetricsDeriver {
    /// Derive kg/frame, kg/winder and the production difference
    ///
    /// # Returns
    /// - `Ok(DerivedMetrics)` with rounded per-machine outputs
    /// - `Err(MetricsError::ZeroDivisor)` when a machine count is
    ///   zero or negative; never a silent 0
    pub fn derive(
        actual_prod: i64,
        target_prod: i64,
        no_of_frame: i64,
        no_of_winder: i64,
    ) -> Result<DerivedMetrics, MetricsError> {
        if no_of_frame <= 0 {
            return Err(MetricsError::ZeroDivisor {
                field: "no_of_frame",
            });
        }
        if no_of_winder <= 0 {
            return Err(MetricsError::ZeroDivisor {
                field: "no_of_winder",
            });
        }

        let kg_per_frame = (actual_prod as f64 / no_of_frame as f64).round() as i64;
        let kg_per_winder = (actual_prod as f64 / no_of_winder as f64).round() as i64;

        Ok(DerivedMetrics {
            kg_per_frame,
            kg_per_winder,
            diff: actual_prod - target_prod,
        })
    }
}
