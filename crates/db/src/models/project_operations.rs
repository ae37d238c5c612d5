//! Monthly operations models and DTOs.

use alliswell_core::operations::OperationsFigures;
use alliswell_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A `project_operations` row joined with its submitter.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectOperations {
    pub id: DbId,
    pub project_id: DbId,
    pub month: u32,
    pub year: i32,
    pub team_size: i64,
    pub revenue: f64,
    pub cost: f64,
    pub gm_percentage: f64,
    pub utilization_percentage: f64,
    pub shadows: i64,
    pub ramp_up: i64,
    pub ramp_down: i64,
    pub open_positions: i64,
    pub submitted_by: DbId,
    pub submitted_by_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectOperations {
    pub fn figures(&self) -> OperationsFigures {
        OperationsFigures {
            team_size: self.team_size,
            revenue: self.revenue,
            cost: self.cost,
            gm_percentage: self.gm_percentage,
            utilization_percentage: self.utilization_percentage,
            shadows: self.shadows,
            ramp_up: self.ramp_up,
            ramp_down: self.ramp_down,
            open_positions: self.open_positions,
        }
    }
}

/// Input for the (project, month, year) upsert. Every figure is written.
#[derive(Debug, Clone)]
pub struct UpsertProjectOperations {
    pub project_id: DbId,
    pub month: u32,
    pub year: i32,
    /// Recorded only when the row is created.
    pub submitted_by: DbId,
    pub figures: OperationsFigures,
}
