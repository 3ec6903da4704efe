// ==========================================
// Spool Winding Production System - Application Layer
// ==========================================

pub mod state;

pub use state::AppState;
