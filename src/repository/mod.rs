// ==========================================
// Spool Winding Production System - Repository Layer
// ==========================================
// Data access only, no business logic.
// All queries are parameterized.
// ==========================================

pub mod entry_repo;
pub mod error;

// Re-export core repositories
pub use entry_repo::EntryRepository;
pub use error::{RepositoryError, RepositoryResult};
