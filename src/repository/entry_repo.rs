// ==========================================
// EntryRepository - production entry store
// ==========================================
// Append-only from the application's perspective: insert and
// read are the only exposed operations, no update, no delete.
// Repository does data mapping only, no business logic.
// ==========================================

use crate::domain::entry::{NewProductionEntry, ProductionEntry};
use crate::domain::types::{Shift, Zone};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

pub struct EntryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl EntryRepository {
    /// Create a new entry repository over a shared connection
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // Write operations
    // ==========================================

    /// Append a validated entry
    ///
    /// The insert is a single atomic statement; created_at is
    /// assigned by the database.
    ///
    /// # Returns
    /// - `Ok(id)`: rowid of the new entry
    pub fn insert(&self, entry: &NewProductionEntry) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO winding_daily (
                zone, entry_date, shift, supervisor_name,
                quality, avg_count, spindle,
                no_of_frame, no_of_winder,
                target_prod, actual_prod,
                kg_per_frame, kg_per_winder, diff
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                entry.zone.as_str(),
                entry.entry_date.format("%Y-%m-%d").to_string(),
                entry.shift.as_str(),
                entry.supervisor_name,
                entry.quality,
                entry.avg_count,
                entry.spindle,
                entry.no_of_frame,
                entry.no_of_winder,
                entry.target_prod,
                entry.actual_prod,
                entry.kg_per_frame,
                entry.kg_per_winder,
                entry.diff,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    // ==========================================
    // Read operations
    // ==========================================

    /// Full table, most recent entry first
    pub fn list_all(&self) -> RepositoryResult<Vec<ProductionEntry>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, zone, entry_date, shift, supervisor_name,
                   quality, avg_count, spindle,
                   no_of_frame, no_of_winder,
                   target_prod, actual_prod,
                   kg_per_frame, kg_per_winder, diff,
                   created_at
            FROM winding_daily
            ORDER BY id DESC
            "#,
        )?;

        let rows = stmt.query_map([], Self::map_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Number of stored entries
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM winding_daily", [], |row| row.get(0))?;
        Ok(n)
    }

    // ==========================================
    // Row mapping
    // ==========================================

    fn map_row(row: &Row<'_>) -> rusqlite::Result<ProductionEntry> {
        let zone_raw: String = row.get(1)?;
        let zone = Zone::parse(&zone_raw).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                format!("unknown zone: {zone_raw}").into(),
            )
        })?;

        let shift_raw: String = row.get(3)?;
        let shift = Shift::parse(&shift_raw).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                format!("unknown shift: {shift_raw}").into(),
            )
        })?;

        Ok(ProductionEntry {
            id: row.get(0)?,
            zone,
            entry_date: row.get(2)?,
            shift,
            supervisor_name: row.get(4)?,
            quality: row.get(5)?,
            avg_count: row.get(6)?,
            spindle: row.get(7)?,
            no_of_frame: row.get(8)?,
            no_of_winder: row.get(9)?,
            target_prod: row.get(10)?,
            actual_prod: row.get(11)?,
            kg_per_frame: row.get(12)?,
            kg_per_winder: row.get(13)?,
            diff: row.get(14)?,
            created_at: row.get(15)?,
        })
    }
}
