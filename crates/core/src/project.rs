//! Project master-data rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Delivery state of a project. Independent of the weekly RAG status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    OnHold,
    Completed,
}

/// Validate the required text fields of a project.
///
/// `name` and `client` must be non-blank; surrounding whitespace is not
/// stripped here, callers store exactly what was sent.
pub fn validate_project_fields(name: &str, client: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Project name must not be empty".into()));
    }
    if client.trim().is_empty() {
        return Err(CoreError::Validation("Client must not be empty".into()));
    }
    Ok(())
}
