// ==========================================
// Spool Winding Production System - Entry Validator
// ==========================================
// Field-level validation of a form submission. All violations
// are collected and reported together; nothing is persisted on
// rejection.
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::entry::EntryDraft;

/// Tolerance for the quality / avg_count invariant
pub const QUALITY_MATCH_TOLERANCE: f64 = 0.01;

// ==========================================
// EntryValidator
// ==========================================
pub struct EntryValidator;

impl EntryValidator {
    /// Validate a draft before derivation and persistence
    ///
    /// # Returns
    /// - `Ok(())` when the draft is acceptable
    /// - `Err(ApiError::ValidationFailed)` naming every violated field
    pub fn validate(draft: &EntryDraft) -> ApiResult<()> {
        let mut violations = Vec::new();

        if draft.supervisor_name.trim().is_empty() {
            violations.push(ValidationViolation::new(
                "supervisor_name",
                "Supervisor Name is required",
            ));
        }

        if draft.quality < 0.0 {
            violations.push(ValidationViolation::new(
                "quality",
                "Quality must not be negative",
            ));
        }
        if draft.avg_count < 0.0 {
            violations.push(ValidationViolation::new(
                "avg_count",
                "Avg. Count must not be negative",
            ));
        }
        if (draft.quality - draft.avg_count).abs() > QUALITY_MATCH_TOLERANCE {
            violations.push(ValidationViolation::new(
                "avg_count",
                "Avg. Count should match Quality",
            ));
        }

        if draft.spindle < 1 {
            violations.push(ValidationViolation::new(
                "spindle",
                "Spindle must be at least 1",
            ));
        }
        if draft.no_of_frame < 1 {
            violations.push(ValidationViolation::new(
                "no_of_frame",
                "No. of Frame must be at least 1",
            ));
        }
        if draft.no_of_winder < 1 {
            violations.push(ValidationViolation::new(
                "no_of_winder",
                "No. of Winder must be at least 1",
            ));
        }

        if draft.target_prod < 0 {
            violations.push(ValidationViolation::new(
                "target_prod",
                "Target Prod. must not be negative",
            ));
        }
        if draft.actual_prod < 0 {
            violations.push(ValidationViolation::new(
                "actual_prod",
                "Actual Prod. must not be negative",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            let reason = violations
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Err(ApiError::ValidationFailed { reason, violations })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Shift, Zone};
    use chrono::NaiveDate;

    fn valid_draft() -> EntryDraft {
        EntryDraft {
            zone: Zone::Red,
            entry_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            shift: Shift::A,
            supervisor_name: "R. Das".to_string(),
            quality: 40.0,
            avg_count: 40.0,
            spindle: 120,
            no_of_frame: 10,
            no_of_winder: 5,
            target_prod: 500,
            actual_prod: 520,
        }
    }

    fn violations(result: ApiResult<()>) -> Vec<ValidationViolation> {
        match result {
            Err(ApiError::ValidationFailed { violations, .. }) => violations,
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(EntryValidator::validate(&valid_draft()).is_ok());
    }

    #[test]
    fn test_empty_supervisor_rejected() {
        let mut draft = valid_draft();
        draft.supervisor_name = "   ".to_string();
        let v = violations(EntryValidator::validate(&draft));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].field, "supervisor_name");
    }

    #[test]
    fn test_quality_mismatch_rejected() {
        let mut draft = valid_draft();
        draft.avg_count = 40.02;
        let v = violations(EntryValidator::validate(&draft));
        assert_eq!(v[0].field, "avg_count");
    }

    #[test]
    fn test_quality_mismatch_within_tolerance_passes() {
        let mut draft = valid_draft();
        draft.avg_count = 40.01;
        assert!(EntryValidator::validate(&draft).is_ok());
    }

    #[test]
    fn test_zero_machine_counts_rejected() {
        let mut draft = valid_draft();
        draft.no_of_frame = 0;
        draft.no_of_winder = 0;
        let v = violations(EntryValidator::validate(&draft));
        let fields: Vec<&str> = v.iter().map(|x| x.field.as_str()).collect();
        assert!(fields.contains(&"no_of_frame"));
        assert!(fields.contains(&"no_of_winder"));
    }

    #[test]
    fn test_all_violations_collected() {
        let mut draft = valid_draft();
        draft.supervisor_name = String::new();
        draft.avg_count = 39.0;
        draft.spindle = 0;
        draft.target_prod = -1;
        let v = violations(EntryValidator::validate(&draft));
        assert_eq!(v.len(), 4);
    }
}
