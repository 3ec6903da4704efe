// ==========================================
// Spool Winding Production System - Application State
// ==========================================
// Wires the shared connection, repositories, engines, renderer,
// notifier and APIs into one startup object.
// ==========================================

use std::sync::{Arc, Mutex};

use anyhow::Context;

use crate::api::{EntryApi, ReportApi};
use crate::config::AppConfig;
use crate::db::{init_schema, open_sqlite_connection};
use crate::export::CsvSnapshotExporter;
use crate::notify::{Notifier, OutboxNotifier};
use crate::report::SvgTableRenderer;
use crate::repository::entry_repo::EntryRepository;

/// Application state
///
/// Holds the API instances and shared resources for the lifetime
/// of the process.
pub struct AppState {
    /// Effective configuration
    pub config: AppConfig,

    /// Daily entry API
    pub entry_api: Arc<EntryApi>,

    /// Weekly report API
    pub report_api: Arc<ReportApi>,

    /// Entry store (kept for embedding callers)
    pub entry_repo: Arc<EntryRepository>,
}

impl AppState {
    /// Build the application state
    ///
    /// Creates the data directory tree, opens the shared SQLite
    /// connection, initializes the schema and constructs every API.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        tracing::info!(data_dir = %config.data_dir.display(), "initializing AppState");

        config
            .ensure_dirs()
            .with_context(|| format!("cannot create data dir {}", config.data_dir.display()))?;

        let db_path = config.db_path();
        let db_path_str = db_path
            .to_str()
            .with_context(|| format!("non-UTF8 database path {}", db_path.display()))?;

        let conn = open_sqlite_connection(db_path_str)
            .with_context(|| format!("cannot open database {}", db_path.display()))?;
        init_schema(&conn).context("schema initialization failed")?;
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // Repository layer
        // ==========================================
        let entry_repo = Arc::new(EntryRepository::new(conn));

        // ==========================================
        // Collaborators
        // ==========================================
        let exporter = Arc::new(CsvSnapshotExporter::new(config.csv_backup_dir()));
        let renderer = Arc::new(SvgTableRenderer::new(config.org_name.clone()));
        let notifier: Option<Arc<dyn Notifier + Send + Sync>> = config
            .mail
            .clone()
            .map(|mail| {
                Arc::new(OutboxNotifier::new(config.outbox_dir(), mail))
                    as Arc<dyn Notifier + Send + Sync>
            });
        if notifier.is_none() {
            tracing::warn!("mail settings absent, report mailing disabled");
        }

        // ==========================================
        // API layer
        // ==========================================
        let entry_api = Arc::new(EntryApi::new(entry_repo.clone(), exporter));
        let report_api = Arc::new(ReportApi::new(
            entry_repo.clone(),
            renderer,
            notifier,
            config.report_dir(),
            config.org_name.clone(),
        ));

        tracing::info!("AppState initialized");
        Ok(Self {
            config,
            entry_api,
            report_api,
            entry_repo,
        })
    }
}
