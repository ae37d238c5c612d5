//! Repository for the `project_values` ledger.

use alliswell_core::access::ListScope;
use alliswell_core::types::DbId;
use alliswell_core::week::DateRange;
use sqlx::SqlitePool;

use crate::models::project_value::{CreateProjectValue, ProjectValue};
use crate::sql_timestamp;

const COLUMNS: &str = "pv.id, pv.project_id, pv.content, pv.submitted_by, pv.created_at, \
                       p.name AS project_name, p.client, p.assigned_director_id, \
                       u.name AS submitted_by_name";

const FROM: &str = "FROM project_values pv \
                    JOIN projects p ON p.id = pv.project_id \
                    JOIN users u ON u.id = pv.submitted_by";

/// Provides create/list/delete for value-ledger entries.
pub struct ProjectValueRepo;

impl ProjectValueRepo {
    /// Record a value entry, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateProjectValue,
    ) -> Result<ProjectValue, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO project_values (project_id, content, submitted_by, created_at)
             VALUES ($1, $2, $3, COALESCE($4, strftime('%Y-%m-%dT%H:%M:%fZ', 'now')))
             RETURNING id",
        )
        .bind(input.project_id)
        .bind(&input.content)
        .bind(input.submitted_by)
        .bind(input.created_at.map(sql_timestamp))
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find an entry by ID, regardless of caller scope.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ProjectValue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE pv.id = $1");
        sqlx::query_as::<_, ProjectValue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All entries of one project, newest first.
    pub async fn list_for_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<ProjectValue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM} WHERE pv.project_id = $1 \
             ORDER BY pv.created_at DESC, pv.id DESC"
        );
        sqlx::query_as::<_, ProjectValue>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Entries within `scope` created inside `range`, newest first.
    ///
    /// The range is inclusive at both ends and the `to` day counts up to
    /// 23:59:59.999, so an entry made late on the last day is included.
    pub async fn list(
        pool: &SqlitePool,
        scope: ListScope,
        range: &DateRange,
    ) -> Result<Vec<ProjectValue>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        match scope {
            ListScope::Nothing => return Ok(Vec::new()),
            ListScope::All => {}
            ListScope::Director(_) => {
                conditions.push(format!(
                    "(p.assigned_director_id = ${bind_idx} OR pv.submitted_by = ${bind_idx})"
                ));
                bind_idx += 1;
            }
        }
        let lower = range.lower_bound().map(sql_timestamp);
        let upper = range.upper_bound().map(sql_timestamp);
        if lower.is_some() {
            conditions.push(format!("pv.created_at >= ${bind_idx}"));
            bind_idx += 1;
        }
        if upper.is_some() {
            conditions.push(format!("pv.created_at <= ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} {FROM} {where_clause} ORDER BY pv.created_at DESC, pv.id DESC"
        );

        let mut q = sqlx::query_as::<_, ProjectValue>(&query);
        if let ListScope::Director(director_id) = scope {
            q = q.bind(director_id);
        }
        if let Some(lower) = lower {
            q = q.bind(lower);
        }
        if let Some(upper) = upper {
            q = q.bind(upper);
        }
        q.fetch_all(pool).await
    }

    /// Permanently delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_values WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
