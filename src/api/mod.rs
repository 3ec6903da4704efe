// ==========================================
// Spool Winding Production System - API Layer
// ==========================================
// User-facing operations: entry submission and weekly reports.
// Converts repository/engine errors into user-friendly errors.
// ==========================================

pub mod entry_api;
pub mod error;
pub mod report_api;
pub mod validator;

// Re-export core API types
pub use entry_api::{EntryApi, SubmitOutcome};
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use report_api::{GeneratedReports, ReportApi, WeeklyReport};
pub use validator::EntryValidator;
