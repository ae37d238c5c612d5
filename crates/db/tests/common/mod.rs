#![allow(dead_code)]

use alliswell_core::roles::Role;
use alliswell_core::status_report::{OverallStatus, StatusContent};
use alliswell_core::types::DbId;
use alliswell_db::models::project::CreateProject;
use alliswell_db::models::user::{CreateUser, User};
use alliswell_db::models::weekly_status::UpsertWeeklyStatus;
use alliswell_db::repositories::{ProjectRepo, UserRepo};
use alliswell_db::DbPool;
use chrono::NaiveDate;

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = alliswell_db::create_memory_pool().await.unwrap();
    alliswell_db::run_migrations(&pool).await.unwrap();
    pool
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub async fn new_user(pool: &DbPool, name: &str, role: Role) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role,
        },
    )
    .await
    .unwrap()
}

pub fn new_project(name: &str, director: Option<DbId>) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        client: format!("{name} Client"),
        description: None,
        start_date: date("2024-06-03"),
        status: None,
        assigned_director_id: director,
        project_manager_email: None,
        business_unit_head_email: None,
    }
}

pub async fn create_project(pool: &DbPool, name: &str, director: Option<DbId>) -> DbId {
    ProjectRepo::create(pool, &new_project(name, director))
        .await
        .unwrap()
        .id
}

pub fn upsert_input(
    project_id: DbId,
    week: &str,
    submitted_by: DbId,
    is_draft: bool,
    all_is_well: &str,
) -> UpsertWeeklyStatus {
    UpsertWeeklyStatus {
        project_id,
        week_ending_date: date(week),
        submitted_by,
        is_draft,
        content: StatusContent::new(OverallStatus::Green, all_is_well),
    }
}
