use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The project exists and is visible, but has no final report yet.
    #[error("No previous status found for project {project_id}")]
    NoPreviousStatus { project_id: DbId },

    /// The project is visible but nothing was reported for that month.
    #[error("No operations data for project {project_id} in {month}/{year}")]
    NoOperationsForMonth {
        project_id: DbId,
        month: u32,
        year: i32,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
