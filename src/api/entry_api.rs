// ==========================================
// Spool Winding Production System - Entry API
// ==========================================
// Submission pipeline: validate -> derive -> append -> snapshot.
// A rejected entry persists nothing; a failed snapshot export
// never undoes an acknowledged append.
// ==========================================

use crate::api::error::ApiResult;
use crate::api::validator::EntryValidator;
use crate::domain::entry::{EntryDraft, NewProductionEntry, ProductionEntry};
use crate::engine::metrics::{DerivedMetrics, MetricsDeriver};
use crate::export::CsvSnapshotExporter;
use crate::repository::entry_repo::EntryRepository;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

// ==========================================
// SubmitOutcome - accepted submission summary
// ==========================================
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Store-assigned entry id
    pub id: i64,
    /// Derived fields as stored on the row
    pub metrics: DerivedMetrics,
    /// Dated CSV backup, None when the export failed
    pub snapshot_path: Option<PathBuf>,
}

// ==========================================
// EntryApi
// ==========================================
pub struct EntryApi {
    entry_repo: Arc<EntryRepository>,
    exporter: Arc<CsvSnapshotExporter>,
}

impl EntryApi {
    pub fn new(entry_repo: Arc<EntryRepository>, exporter: Arc<CsvSnapshotExporter>) -> Self {
        Self {
            entry_repo,
            exporter,
        }
    }

    /// Submit a daily production entry
    ///
    /// # Returns
    /// - `Ok(SubmitOutcome)` once the append is durable
    /// - `Err(ApiError::ValidationFailed)` naming each rejected field;
    ///   no row is inserted
    pub fn submit_entry(&self, draft: &EntryDraft) -> ApiResult<SubmitOutcome> {
        EntryValidator::validate(draft)?;

        // Zero divisors are pre-empted by validation, but the deriver
        // guards on its own; every entry point must share the rule.
        let metrics = MetricsDeriver::derive(
            draft.actual_prod,
            draft.target_prod,
            draft.no_of_frame,
            draft.no_of_winder,
        )?;

        let entry = NewProductionEntry::from_draft(draft, metrics);
        let id = self.entry_repo.insert(&entry)?;

        info!(
            id,
            zone = %entry.zone,
            entry_date = %entry.entry_date,
            supervisor = %entry.supervisor_name,
            kg_per_frame = metrics.kg_per_frame,
            kg_per_winder = metrics.kg_per_winder,
            diff = metrics.diff,
            "production entry saved"
        );

        // Snapshot of the full table, dated by the entry; a failure
        // here is logged and surfaced as a missing path only.
        let snapshot_path = match self
            .exporter
            .export_snapshot(&self.entry_repo.list_all()?, draft.entry_date)
        {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "csv snapshot export failed, entry remains saved");
                None
            }
        };

        Ok(SubmitOutcome {
            id,
            metrics,
            snapshot_path,
        })
    }

    /// Saved data for display, most recent entry first
    pub fn list_entries(&self) -> ApiResult<Vec<ProductionEntry>> {
        Ok(self.entry_repo.list_all()?)
    }

    /// Number of saved entries
    pub fn entry_count(&self) -> ApiResult<i64> {
        Ok(self.entry_repo.count()?)
    }
}
