//! Monthly operations figures of a project and their validation rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::status_report::describe;

pub const EARLIEST_YEAR: i32 = 2000;
pub const LATEST_YEAR: i32 = 2100;

/// The figures reported for one project and month.
///
/// Every save replaces all of them. An omitted figure is stored as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OperationsFigures {
    #[validate(range(min = 0, message = "team_size must not be negative"))]
    pub team_size: i64,
    #[validate(range(min = 0.0, message = "revenue must not be negative"))]
    pub revenue: f64,
    #[validate(range(min = 0.0, message = "cost must not be negative"))]
    pub cost: f64,
    /// Gross margin. Negative when cost exceeds revenue.
    #[validate(range(max = 100.0, message = "gm_percentage must be at most 100"))]
    pub gm_percentage: f64,
    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "utilization_percentage must be between 0 and 100"
    ))]
    pub utilization_percentage: f64,
    #[validate(range(min = 0, message = "shadows must not be negative"))]
    pub shadows: i64,
    #[validate(range(min = 0, message = "ramp_up must not be negative"))]
    pub ramp_up: i64,
    #[validate(range(min = 0, message = "ramp_down must not be negative"))]
    pub ramp_down: i64,
    #[validate(range(min = 0, message = "open_positions must not be negative"))]
    pub open_positions: i64,
}

/// Validate a reporting month: `month` in 1..=12 and a plausible year.
pub fn validate_period(month: u32, year: i32) -> Result<(), CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    if !(EARLIEST_YEAR..=LATEST_YEAR).contains(&year) {
        return Err(CoreError::Validation(format!(
            "year must be between {EARLIEST_YEAR} and {LATEST_YEAR}, got {year}"
        )));
    }
    Ok(())
}

pub fn validate_figures(figures: &OperationsFigures) -> Result<(), CoreError> {
    figures
        .validate()
        .map_err(|errs| CoreError::Validation(describe(&errs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_period_bounds() {
        assert!(validate_period(1, 2025).is_ok());
        assert!(validate_period(12, EARLIEST_YEAR).is_ok());
        assert_matches!(
            validate_period(0, 2025),
            Err(CoreError::Validation(msg)) if msg.contains("month")
        );
        assert!(validate_period(13, 2025).is_err());
        assert_matches!(
            validate_period(6, 1999),
            Err(CoreError::Validation(msg)) if msg.contains("year")
        );
    }

    #[test]
    fn test_default_figures_are_valid() {
        assert!(validate_figures(&OperationsFigures::default()).is_ok());
    }

    #[test]
    fn test_negative_margin_is_allowed() {
        let figures = OperationsFigures {
            revenue: 100.0,
            cost: 150.0,
            gm_percentage: -50.0,
            ..Default::default()
        };
        assert!(validate_figures(&figures).is_ok());
    }

    #[test]
    fn test_bad_figures_are_all_reported() {
        let figures = OperationsFigures {
            team_size: -1,
            utilization_percentage: 120.0,
            ..Default::default()
        };
        let msg = validate_figures(&figures).unwrap_err().to_string();
        assert!(msg.contains("team_size must not be negative"));
        assert!(msg.contains("utilization_percentage must be between 0 and 100"));
    }
}
