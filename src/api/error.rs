// ==========================================
// Spool Winding Production System - API Error Types
// ==========================================
// Every error carries an explicit, user-readable reason.
// No error here is fatal; each operation is retryable.
// ==========================================

use crate::engine::metrics::MetricsError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Validation errors
    // ==========================================
    /// Form rejected; entry not persisted, no partial state
    #[error("entry rejected: {reason}")]
    ValidationFailed {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ==========================================
    // Reporting errors
    // ==========================================
    /// Blocking user-facing condition: nothing entered yet
    #[error("no production data available yet")]
    EmptyStore,

    /// Mirror of the original generate-first guard
    #[error("reports for week {week} have not been generated yet")]
    ReportsNotGenerated { week: u32 },

    #[error("report rendering failed: {0}")]
    RenderError(String),

    // ==========================================
    // Mail errors
    // ==========================================
    #[error("mail settings are not configured")]
    MailNotConfigured,

    /// Transport failure; artifacts remain available on disk
    #[error("mail delivery failed: {0}")]
    MailError(String),

    // ==========================================
    // Data access errors
    // ==========================================
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("database transaction failed: {0}")]
    DatabaseTransactionError(String),

    // ==========================================
    // Generic errors
    // ==========================================
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Field-level violation detail
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ValidationViolation {
    /// Form field the violation names
    pub field: String,
    /// User-readable message
    pub message: String,
}

impl ValidationViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ==========================================
// Conversions from lower layers
// ==========================================

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{entity} (id={id}) does not exist"))
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseError(format!("database lock acquisition failed: {msg}"))
            }
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::DatabaseTransactionError(msg)
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::DatabaseError(format!("unique constraint violated: {msg}"))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<MetricsError> for ApiError {
    fn from(err: MetricsError) -> Self {
        // Zero machine counts are a form problem, never a fault
        let reason = err.to_string();
        let MetricsError::ZeroDivisor { field } = err;
        ApiError::ValidationFailed {
            reason,
            violations: vec![ValidationViolation::new(field, "must be at least 1")],
        }
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
