//! Repository for the `projects` table.

use alliswell_core::access::ListScope;
use alliswell_core::project::ProjectStatus;
use alliswell_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list (with the director join) shared across queries.
const COLUMNS: &str = "p.id, p.name, p.client, p.description, p.start_date, p.status, \
                       p.assigned_director_id, d.name AS director_name, \
                       p.project_manager_email, p.business_unit_head_email, \
                       p.created_at, p.updated_at";

const FROM: &str = "FROM projects p LEFT JOIN users d ON d.id = p.assigned_director_id";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `active`.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO projects
                (name, client, description, start_date, status, assigned_director_id,
                 project_manager_email, business_unit_head_email)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.client)
        .bind(&input.description)
        .bind(input.start_date)
        .bind(input.status.unwrap_or(ProjectStatus::Active))
        .bind(input.assigned_director_id)
        .bind(&input.project_manager_email)
        .bind(&input.business_unit_head_email)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a project by its internal ID, regardless of caller scope.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE p.id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects within `scope`, optionally filtered by status, ordered
    /// by name.
    pub async fn list(
        pool: &SqlitePool,
        scope: ListScope,
        status: Option<ProjectStatus>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        match scope {
            ListScope::Nothing => return Ok(Vec::new()),
            ListScope::All => {}
            ListScope::Director(_) => {
                conditions.push(format!("p.assigned_director_id = ${bind_idx}"));
                bind_idx += 1;
            }
        }
        if status.is_some() {
            conditions.push(format!("p.status = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} {FROM} {where_clause} ORDER BY p.name");
        let mut q = sqlx::query_as::<_, Project>(&query);
        if let ListScope::Director(director_id) = scope {
            q = q.bind(director_id);
        }
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                name = COALESCE($2, name),
                client = COALESCE($3, client),
                description = COALESCE($4, description),
                start_date = COALESCE($5, start_date),
                status = COALESCE($6, status),
                assigned_director_id = COALESCE($7, assigned_director_id),
                project_manager_email = COALESCE($8, project_manager_email),
                business_unit_head_email = COALESCE($9, business_unit_head_email),
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.client)
        .bind(&input.description)
        .bind(input.start_date)
        .bind(input.status)
        .bind(input.assigned_director_id)
        .bind(&input.project_manager_email)
        .bind(&input.business_unit_head_email)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Permanently delete a project and, via cascade, its statuses and
    /// value entries. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
