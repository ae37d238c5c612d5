//! Weekly status report content and its validation rules.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Maximum length (in characters) of the "all is well" narrative.
pub const ALL_IS_WELL_MAX_CHARS: u64 = 1000;

/// Maximum length (in characters) of each optional narrative field.
pub const NARRATIVE_MAX_CHARS: u64 = 300;

/// Red/Amber/Green overall health of a project for one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Green,
    Amber,
    Red,
}

/// The user-editable content of a weekly status.
///
/// Every save replaces all of these fields on the stored row. An omitted
/// optional field is stored as NULL, not left at its previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StatusContent {
    pub overall_status: OverallStatus,
    #[serde(default)]
    #[validate(length(
        max = ALL_IS_WELL_MAX_CHARS,
        message = "all_is_well must be at most 1000 characters"
    ))]
    pub all_is_well: String,
    #[validate(length(
        max = NARRATIVE_MAX_CHARS,
        message = "risks must be at most 300 characters"
    ))]
    pub risks: Option<String>,
    #[validate(length(
        max = NARRATIVE_MAX_CHARS,
        message = "opportunities must be at most 300 characters"
    ))]
    pub opportunities: Option<String>,
    #[validate(length(
        max = NARRATIVE_MAX_CHARS,
        message = "value_projects must be at most 300 characters"
    ))]
    pub value_projects: Option<String>,
    #[validate(length(
        max = NARRATIVE_MAX_CHARS,
        message = "action_items must be at most 300 characters"
    ))]
    pub action_items: Option<String>,
}

impl StatusContent {
    /// Content with only the required fields set.
    pub fn new(overall_status: OverallStatus, all_is_well: impl Into<String>) -> Self {
        Self {
            overall_status,
            all_is_well: all_is_well.into(),
            risks: None,
            opportunities: None,
            value_projects: None,
            action_items: None,
        }
    }
}

/// Validate status content for a save.
///
/// Length bounds apply to drafts and finals alike. `all_is_well` must be
/// non-blank only when the save is final; drafts may be incomplete.
pub fn validate_status_content(content: &StatusContent, is_draft: bool) -> Result<(), CoreError> {
    content
        .validate()
        .map_err(|errs| CoreError::Validation(describe(&errs)))?;

    if !is_draft && content.all_is_well.trim().is_empty() {
        return Err(CoreError::Validation(
            "all_is_well is required for a final submission".into(),
        ));
    }
    Ok(())
}

/// Validate the free-text content of a value-ledger entry.
pub fn validate_value_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content is required".into()));
    }
    Ok(())
}

/// Flatten `validator` errors into one sorted, human-readable line.
pub(crate) fn describe(errs: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errs
        .field_errors()
        .into_iter()
        .flat_map(|(field, list)| {
            list.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
