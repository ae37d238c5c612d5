//! Weekly status models and DTOs.

use alliswell_core::project::ProjectStatus;
use alliswell_core::status_report::{OverallStatus, StatusContent};
use alliswell_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `weekly_status` row joined with its project and submitter.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusRecord {
    pub id: DbId,
    pub project_id: DbId,
    pub week_ending_date: NaiveDate,
    pub overall_status: OverallStatus,
    pub all_is_well: String,
    pub risks: Option<String>,
    pub opportunities: Option<String>,
    pub value_projects: Option<String>,
    pub action_items: Option<String>,
    pub submitted_by: DbId,
    pub is_draft: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub project_name: String,
    pub client: String,
    pub assigned_director_id: Option<DbId>,
    pub submitted_by_name: String,
}

impl StatusRecord {
    /// The editable content of this record, e.g. to copy it forward into
    /// next week's report.
    pub fn content(&self) -> StatusContent {
        StatusContent {
            overall_status: self.overall_status,
            all_is_well: self.all_is_well.clone(),
            risks: self.risks.clone(),
            opportunities: self.opportunities.clone(),
            value_projects: self.value_projects.clone(),
            action_items: self.action_items.clone(),
        }
    }
}

/// Input for the (project, week) upsert. Every content field is written.
#[derive(Debug, Clone)]
pub struct UpsertWeeklyStatus {
    pub project_id: DbId,
    pub week_ending_date: NaiveDate,
    /// Recorded only when the row is created.
    pub submitted_by: DbId,
    pub is_draft: bool,
    pub content: StatusContent,
}

/// Optional filters for listing statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusFilter {
    pub project_id: Option<DbId>,
    pub overall_status: Option<OverallStatus>,
    pub week_ending_date: Option<NaiveDate>,
    /// Drafts are excluded unless this is set.
    #[serde(default)]
    pub include_drafts: bool,
}

/// One dashboard row per project: the project plus its latest final status,
/// with every status column `None` when the project has no final report.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LatestStatusRow {
    pub project_id: DbId,
    pub project_name: String,
    pub client: String,
    pub project_status: ProjectStatus,
    pub assigned_director_id: Option<DbId>,
    pub director_name: Option<String>,
    pub status_id: Option<DbId>,
    pub week_ending_date: Option<NaiveDate>,
    pub overall_status: Option<OverallStatus>,
    pub all_is_well: Option<String>,
    pub risks: Option<String>,
    pub opportunities: Option<String>,
    pub value_projects: Option<String>,
    pub action_items: Option<String>,
    pub submitted_by: Option<DbId>,
    pub submitted_by_name: Option<String>,
    pub updated_at: Option<Timestamp>,
}
