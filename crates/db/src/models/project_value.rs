//! Value-ledger entry model and DTOs.

use alliswell_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `project_values` row joined with its project and submitter.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectValue {
    pub id: DbId,
    pub project_id: DbId,
    pub content: String,
    pub submitted_by: DbId,
    pub created_at: Timestamp,
    pub project_name: String,
    pub client: String,
    pub assigned_director_id: Option<DbId>,
    pub submitted_by_name: String,
}

/// DTO for recording a value entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectValue {
    pub project_id: DbId,
    pub content: String,
    pub submitted_by: DbId,
    /// Backdated creation time for imported entries; `None` means now.
    pub created_at: Option<Timestamp>,
}
