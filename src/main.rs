// ==========================================
// Spool Winding Production System - Main Entry
// ==========================================
// Process startup: logging, configuration, storage init.
// All operations are exposed through the library APIs; the
// binary verifies the deployment and reports its locations.
// ==========================================

use spool_winding::{logging, AppConfig, AppState};

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", spool_winding::APP_NAME);
    tracing::info!("version: {}", spool_winding::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env();
    let state = AppState::new(config)?;

    tracing::info!("DB  : {}", state.config.db_path().display());
    tracing::info!("CSV : {}", state.config.csv_backup_dir().display());
    tracing::info!("RPT : {}", state.config.report_dir().display());

    let entries = state.entry_api.entry_count()?;
    let weeks = state.report_api.available_weeks()?;
    tracing::info!(entries, weeks = weeks.len(), "store ready");

    Ok(())
}
