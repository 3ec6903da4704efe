// ==========================================
// Spool Winding Production System - Report API
// ==========================================
// Weekly management reports: aggregate the store for a selected
// (year, week), render both tables as image artifacts, and queue
// them for mailing. Artifacts stay on disk whatever the mail
// transport does.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::report::{ZoneQualityComparison, ZoneSupervisorReport};
use crate::engine::weekly::WeeklyAggregator;
use crate::notify::{MailMessage, Notifier};
use crate::report::{ReportRenderer, ReportTable};
use crate::repository::entry_repo::EntryRepository;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

// ==========================================
// WeeklyReport - aggregated tables for one selection
// ==========================================
#[derive(Debug, Clone)]
pub struct WeeklyReport {
    pub year: i32,
    pub week: u32,
    pub zone_quality: Vec<ZoneQualityComparison>,
    pub zone_supervisor: Vec<ZoneSupervisorReport>,
}

// ==========================================
// GeneratedReports - rendered artifact locations
// ==========================================
#[derive(Debug, Clone)]
pub struct GeneratedReports {
    pub zone_quality_path: PathBuf,
    pub zone_supervisor_path: PathBuf,
}

// ==========================================
// ReportApi
// ==========================================
pub struct ReportApi {
    entry_repo: Arc<EntryRepository>,
    renderer: Arc<dyn ReportRenderer + Send + Sync>,
    notifier: Option<Arc<dyn Notifier + Send + Sync>>,
    report_dir: PathBuf,
    org_name: String,
}

impl ReportApi {
    pub fn new(
        entry_repo: Arc<EntryRepository>,
        renderer: Arc<dyn ReportRenderer + Send + Sync>,
        notifier: Option<Arc<dyn Notifier + Send + Sync>>,
        report_dir: PathBuf,
        org_name: String,
    ) -> Self {
        Self {
            entry_repo,
            renderer,
            notifier,
            report_dir,
            org_name,
        }
    }

    // ==========================================
    // Query operations
    // ==========================================

    /// Distinct (year, week) selections present in the store,
    /// newest year first, weeks ascending within a year
    pub fn available_weeks(&self) -> ApiResult<Vec<(i32, u32)>> {
        let entries = self.entry_repo.list_all()?;
        let keys: BTreeSet<(i32, u32)> = entries.iter().map(WeeklyAggregator::week_key).collect();
        let mut weeks: Vec<(i32, u32)> = keys.into_iter().collect();
        weeks.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        Ok(weeks)
    }

    /// Aggregate the store for the selected week
    ///
    /// # Returns
    /// - `Err(ApiError::EmptyStore)` when nothing has been entered
    ///   yet; no report can be generated
    /// - `Err(ApiError::InvalidInput)` for a week outside 1..=53
    pub fn weekly_report(&self, year: i32, week: u32) -> ApiResult<WeeklyReport> {
        if !(1..=53).contains(&week) {
            return Err(ApiError::InvalidInput(format!(
                "week must be within 1..=53, got {week}"
            )));
        }

        let entries = self.entry_repo.list_all()?;
        if entries.is_empty() {
            return Err(ApiError::EmptyStore);
        }

        let (zone_quality, zone_supervisor) = WeeklyAggregator::aggregate(&entries, year, week);
        Ok(WeeklyReport {
            year,
            week,
            zone_quality,
            zone_supervisor,
        })
    }

    // ==========================================
    // Artifact operations
    // ==========================================

    /// Report artifact paths for a week, named by ISO week number
    pub fn artifact_paths(&self, week: u32) -> GeneratedReports {
        GeneratedReports {
            zone_quality_path: self.report_dir.join(format!("Zone_Quality_Week_{week}.svg")),
            zone_supervisor_path: self
                .report_dir
                .join(format!("Zone_Supervisor_Week_{week}.svg")),
        }
    }

    /// Render both weekly tables to image files
    pub fn generate_reports(&self, year: i32, week: u32) -> ApiResult<GeneratedReports> {
        let report = self.weekly_report(year, week)?;
        let paths = self.artifact_paths(week);

        fs::create_dir_all(&self.report_dir)
            .map_err(|e| ApiError::RenderError(format!("cannot create report dir: {e}")))?;

        let table1 = ReportTable::zone_quality(&report.zone_quality);
        let title1 = format!("Zone & Quality Wise Weekly Report – Week {week}");
        let bytes = self
            .renderer
            .render(&table1, &title1)
            .map_err(|e| ApiError::RenderError(e.to_string()))?;
        fs::write(&paths.zone_quality_path, bytes)
            .map_err(|e| ApiError::RenderError(format!("cannot write report artifact: {e}")))?;

        let table2 = ReportTable::zone_supervisor(&report.zone_supervisor);
        let title2 = format!("Zone-wise Supervisor Performance Report – Week {week}");
        let bytes = self
            .renderer
            .render(&table2, &title2)
            .map_err(|e| ApiError::RenderError(e.to_string()))?;
        fs::write(&paths.zone_supervisor_path, bytes)
            .map_err(|e| ApiError::RenderError(format!("cannot write report artifact: {e}")))?;

        info!(
            year,
            week,
            zone_quality = %paths.zone_quality_path.display(),
            zone_supervisor = %paths.zone_supervisor_path.display(),
            "weekly reports generated"
        );
        Ok(paths)
    }

    // ==========================================
    // Mail operations
    // ==========================================

    /// Queue the two generated artifacts for mailing
    ///
    /// Both artifacts must already exist (generate first). Delivery
    /// failure is surfaced; the files remain available for manual
    /// retrieval and there is no retry.
    pub fn email_reports(&self, year: i32, week: u32) -> ApiResult<()> {
        let notifier = self.notifier.as_ref().ok_or(ApiError::MailNotConfigured)?;

        let paths = self.artifact_paths(week);
        if !paths.zone_quality_path.is_file() || !paths.zone_supervisor_path.is_file() {
            return Err(ApiError::ReportsNotGenerated { week });
        }

        let subject = format!(
            "{} – Weekly Spool Winding Report (Week {week}, {year})",
            self.org_name
        );
        let body = format!(
            "Dear Sir,\n\n\
             Please find attached the weekly Spool Winding reports of {org}.\n\n\
             1. Zone & Quality-wise report with weekly comparison\n\
             2. Zone-wise Supervisor performance report\n\n\
             Regards,\n\
             {org}\n",
            org = self.org_name
        );

        notifier
            .send(&MailMessage {
                subject,
                body,
                attachments: vec![paths.zone_quality_path, paths.zone_supervisor_path],
            })
            .map_err(|e| ApiError::MailError(e.to_string()))?;

        info!(year, week, "weekly report mail queued");
        Ok(())
    }
}
