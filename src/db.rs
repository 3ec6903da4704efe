// ==========================================
// Spool Winding Production System - SQLite Connection Init
// ==========================================
// Goals:
// - One place for Connection::open + PRAGMA so every module
//   gets the same foreign_keys / busy_timeout behavior
// - One place for the winding_daily schema
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMA set to a SQLite connection
///
/// Both foreign_keys and busy_timeout are per-connection settings.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration applied
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the winding_daily table if it does not exist yet
///
/// Derived columns (kg_per_frame / kg_per_winder / diff) are stored
/// denormalized; created_at is server-assigned and never updated.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS winding_daily (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            zone TEXT NOT NULL,
            entry_date TEXT NOT NULL,
            shift TEXT NOT NULL,
            supervisor_name TEXT NOT NULL,
            quality REAL NOT NULL,
            avg_count REAL NOT NULL,
            spindle INTEGER NOT NULL,
            no_of_frame INTEGER NOT NULL,
            no_of_winder INTEGER NOT NULL,
            target_prod INTEGER NOT NULL,
            actual_prod INTEGER NOT NULL,
            kg_per_frame INTEGER NOT NULL,
            kg_per_winder INTEGER NOT NULL,
            diff INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}
