//! Project entity model and DTOs.

use alliswell_core::project::ProjectStatus;
use alliswell_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table, joined with the display name of
/// its assigned Delivery Director.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub client: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub status: ProjectStatus,
    pub assigned_director_id: Option<DbId>,
    pub director_name: Option<String>,
    pub project_manager_email: Option<String>,
    pub business_unit_head_email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub client: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    /// Defaults to `active` if omitted.
    pub status: Option<ProjectStatus>,
    pub assigned_director_id: Option<DbId>,
    pub project_manager_email: Option<String>,
    pub business_unit_head_email: Option<String>,
}

/// DTO for updating an existing project. All fields are optional; `None`
/// keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub client: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub assigned_director_id: Option<DbId>,
    pub project_manager_email: Option<String>,
    pub business_unit_head_email: Option<String>,
}
