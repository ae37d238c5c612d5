//! Repository for the `project_operations` table.

use alliswell_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project_operations::{ProjectOperations, UpsertProjectOperations};

const COLUMNS: &str = "po.id, po.project_id, po.month, po.year, po.team_size, po.revenue, \
                       po.cost, po.gm_percentage, po.utilization_percentage, po.shadows, \
                       po.ramp_up, po.ramp_down, po.open_positions, po.submitted_by, \
                       u.name AS submitted_by_name, po.created_at, po.updated_at";

const FROM: &str = "FROM project_operations po JOIN users u ON u.id = po.submitted_by";

/// Provides the monthly upsert, reads and delete for operations figures.
pub struct OperationsRepo;

impl OperationsRepo {
    /// Insert the figures for `(project_id, month, year)` or overwrite the
    /// existing row in place.
    ///
    /// Every figure and `updated_at` are replaced in one statement;
    /// `submitted_by` keeps the first submitter.
    pub async fn upsert(
        pool: &SqlitePool,
        input: &UpsertProjectOperations,
    ) -> Result<ProjectOperations, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let figures = &input.figures;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO project_operations
                (project_id, month, year, team_size, revenue, cost, gm_percentage,
                 utilization_percentage, shadows, ramp_up, ramp_down, open_positions,
                 submitted_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             ON CONFLICT (project_id, month, year) DO UPDATE SET
                team_size = excluded.team_size,
                revenue = excluded.revenue,
                cost = excluded.cost,
                gm_percentage = excluded.gm_percentage,
                utilization_percentage = excluded.utilization_percentage,
                shadows = excluded.shadows,
                ramp_up = excluded.ramp_up,
                ramp_down = excluded.ramp_down,
                open_positions = excluded.open_positions,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             RETURNING id",
        )
        .bind(input.project_id)
        .bind(input.month)
        .bind(input.year)
        .bind(figures.team_size)
        .bind(figures.revenue)
        .bind(figures.cost)
        .bind(figures.gm_percentage)
        .bind(figures.utilization_percentage)
        .bind(figures.shadows)
        .bind(figures.ramp_up)
        .bind(figures.ramp_down)
        .bind(figures.open_positions)
        .bind(input.submitted_by)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("SELECT {COLUMNS} {FROM} WHERE po.id = $1");
        let record = sqlx::query_as::<_, ProjectOperations>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(record)
    }

    /// The figures of one project for one month, if reported.
    pub async fn find_by_month(
        pool: &SqlitePool,
        project_id: DbId,
        month: u32,
        year: i32,
    ) -> Result<Option<ProjectOperations>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM} \
             WHERE po.project_id = $1 AND po.month = $2 AND po.year = $3"
        );
        sqlx::query_as::<_, ProjectOperations>(&query)
            .bind(project_id)
            .bind(month)
            .bind(year)
            .fetch_optional(pool)
            .await
    }

    /// Every reported month of one project, newest first.
    pub async fn list_for_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<ProjectOperations>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM} WHERE po.project_id = $1 \
             ORDER BY po.year DESC, po.month DESC"
        );
        sqlx::query_as::<_, ProjectOperations>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a row of the given project. Returns `false` when `id` does
    /// not exist or belongs to another project.
    pub async fn delete(
        pool: &SqlitePool,
        project_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_operations WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
