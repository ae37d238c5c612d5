//! Repository for the `weekly_status` table and the dashboard aggregations
//! built on it.

use alliswell_core::access::ListScope;
use alliswell_core::types::DbId;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::weekly_status::{
    LatestStatusRow, StatusFilter, StatusRecord, UpsertWeeklyStatus,
};

/// Column list for [`StatusRecord`] (joined with project and submitter).
const RECORD_COLUMNS: &str = "ws.id, ws.project_id, ws.week_ending_date, ws.overall_status, \
                              ws.all_is_well, ws.risks, ws.opportunities, ws.value_projects, \
                              ws.action_items, ws.submitted_by, ws.is_draft, \
                              ws.created_at, ws.updated_at, \
                              p.name AS project_name, p.client, p.assigned_director_id, \
                              u.name AS submitted_by_name";

const RECORD_FROM: &str = "FROM weekly_status ws \
                           JOIN projects p ON p.id = ws.project_id \
                           JOIN users u ON u.id = ws.submitted_by";

/// Provides the upsert, reads and aggregations for weekly statuses.
pub struct WeeklyStatusRepo;

impl WeeklyStatusRepo {
    /// Insert the status for `(project_id, week_ending_date)` or overwrite
    /// the existing one in place.
    ///
    /// A single `ON CONFLICT (project_id, week_ending_date) DO UPDATE`
    /// statement replaces every content field, `is_draft` and `updated_at`.
    /// Omitted optional fields become NULL. `submitted_by` keeps the first
    /// submitter, who stays the owner of the row. Concurrent
    /// calls for the same pair always end in one row holding the content of
    /// whichever statement ran last.
    pub async fn upsert(
        pool: &SqlitePool,
        input: &UpsertWeeklyStatus,
    ) -> Result<StatusRecord, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO weekly_status
                (project_id, week_ending_date, overall_status, all_is_well, risks,
                 opportunities, value_projects, action_items, submitted_by, is_draft)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (project_id, week_ending_date) DO UPDATE SET
                overall_status = excluded.overall_status,
                all_is_well = excluded.all_is_well,
                risks = excluded.risks,
                opportunities = excluded.opportunities,
                value_projects = excluded.value_projects,
                action_items = excluded.action_items,
                is_draft = excluded.is_draft,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             RETURNING id",
        )
        .bind(input.project_id)
        .bind(input.week_ending_date)
        .bind(input.content.overall_status)
        .bind(&input.content.all_is_well)
        .bind(&input.content.risks)
        .bind(&input.content.opportunities)
        .bind(&input.content.value_projects)
        .bind(&input.content.action_items)
        .bind(input.submitted_by)
        .bind(input.is_draft)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("SELECT {RECORD_COLUMNS} {RECORD_FROM} WHERE ws.id = $1");
        let record = sqlx::query_as::<_, StatusRecord>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(record)
    }

    /// Find a status by ID, regardless of caller scope.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<StatusRecord>, sqlx::Error> {
        let query = format!("SELECT {RECORD_COLUMNS} {RECORD_FROM} WHERE ws.id = $1");
        sqlx::query_as::<_, StatusRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List statuses within `scope` matching `filter`, newest week first,
    /// then by project name.
    ///
    /// For a director scope a row is included when its project is assigned
    /// to the director or the director submitted it.
    pub async fn list(
        pool: &SqlitePool,
        scope: ListScope,
        filter: &StatusFilter,
    ) -> Result<Vec<StatusRecord>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        match scope {
            ListScope::Nothing => return Ok(Vec::new()),
            ListScope::All => {}
            ListScope::Director(_) => {
                conditions.push(format!(
                    "(p.assigned_director_id = ${bind_idx} OR ws.submitted_by = ${bind_idx})"
                ));
                bind_idx += 1;
            }
        }
        if filter.project_id.is_some() {
            conditions.push(format!("ws.project_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.overall_status.is_some() {
            conditions.push(format!("ws.overall_status = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.week_ending_date.is_some() {
            conditions.push(format!("ws.week_ending_date = ${bind_idx}"));
        }
        if !filter.include_drafts {
            conditions.push("ws.is_draft = 0".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {RECORD_COLUMNS} {RECORD_FROM} {where_clause} \
             ORDER BY ws.week_ending_date DESC, p.name, ws.id"
        );

        let mut q = sqlx::query_as::<_, StatusRecord>(&query);
        if let ListScope::Director(director_id) = scope {
            q = q.bind(director_id);
        }
        if let Some(project_id) = filter.project_id {
            q = q.bind(project_id);
        }
        if let Some(overall_status) = filter.overall_status {
            q = q.bind(overall_status);
        }
        if let Some(week) = filter.week_ending_date {
            q = q.bind(week);
        }
        q.fetch_all(pool).await
    }

    /// The most recent final status of one project, if any.
    ///
    /// Ties on week-ending date (impossible under the unique constraint)
    /// resolve to the most recently updated row.
    pub async fn latest_final_for_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Option<StatusRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} {RECORD_FROM} \
             WHERE ws.project_id = $1 AND ws.is_draft = 0 \
             ORDER BY ws.week_ending_date DESC, ws.updated_at DESC, ws.id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, StatusRecord>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// One row per project within `scope`, ordered by project name, each
    /// carrying its latest final status or NULL status columns.
    pub async fn latest_per_project(
        pool: &SqlitePool,
        scope: ListScope,
    ) -> Result<Vec<LatestStatusRow>, sqlx::Error> {
        let where_clause = match scope {
            ListScope::Nothing => return Ok(Vec::new()),
            ListScope::All => "",
            ListScope::Director(_) => "WHERE p.assigned_director_id = $1",
        };

        let query = format!(
            "WITH ranked AS ( \
                SELECT ws.*, ROW_NUMBER() OVER ( \
                    PARTITION BY ws.project_id \
                    ORDER BY ws.week_ending_date DESC, ws.updated_at DESC, ws.id DESC \
                ) AS rn \
                FROM weekly_status ws \
                WHERE ws.is_draft = 0 \
             ) \
             SELECT p.id AS project_id, p.name AS project_name, p.client, \
                    p.status AS project_status, p.assigned_director_id, \
                    d.name AS director_name, \
                    r.id AS status_id, r.week_ending_date, r.overall_status, \
                    r.all_is_well, r.risks, r.opportunities, r.value_projects, \
                    r.action_items, r.submitted_by, u.name AS submitted_by_name, \
                    r.updated_at \
             FROM projects p \
             LEFT JOIN ranked r ON r.project_id = p.id AND r.rn = 1 \
             LEFT JOIN users d ON d.id = p.assigned_director_id \
             LEFT JOIN users u ON u.id = r.submitted_by \
             {where_clause} \
             ORDER BY p.name"
        );

        let mut q = sqlx::query_as::<_, LatestStatusRow>(&query);
        if let ListScope::Director(director_id) = scope {
            q = q.bind(director_id);
        }
        q.fetch_all(pool).await
    }

    /// Permanently delete a status. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM weekly_status WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of rows stored for one (project, week) pair. At most 1.
    pub async fn count_for_project_week(
        pool: &SqlitePool,
        project_id: DbId,
        week_ending_date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM weekly_status WHERE project_id = $1 AND week_ending_date = $2",
        )
        .bind(project_id)
        .bind(week_ending_date)
        .fetch_one(pool)
        .await
    }
}
