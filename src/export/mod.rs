// ==========================================
// Spool Winding Production System - CSV Snapshot Export
// ==========================================
// After every successful append the full table is re-exported to
// a dated flat-file backup. The backup is a resilience measure
// against store corruption; nothing in the application reads it.
// ==========================================

use crate::domain::entry::ProductionEntry;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Snapshot export error
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("snapshot directory error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot write failed: {0}")]
    Csv(#[from] csv::Error),
}

// ==========================================
// CsvSnapshotExporter
// ==========================================
pub struct CsvSnapshotExporter {
    backup_dir: PathBuf,
}

impl CsvSnapshotExporter {
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Snapshot file path for an entry date: winding_<date>.csv
    pub fn snapshot_path(&self, entry_date: NaiveDate) -> PathBuf {
        self.backup_dir
            .join(format!("winding_{}.csv", entry_date.format("%Y-%m-%d")))
    }

    /// Write the full table (as returned by the store, most recent
    /// first) to the dated snapshot file, replacing any previous
    /// snapshot for the same date.
    pub fn export_snapshot(
        &self,
        entries: &[ProductionEntry],
        entry_date: NaiveDate,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.backup_dir)?;

        let path = self.snapshot_path(entry_date);
        let mut writer = csv::Writer::from_path(&path)?;
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;

        tracing::debug!(path = %path.display(), rows = entries.len(), "csv snapshot written");
        Ok(path)
    }
}
