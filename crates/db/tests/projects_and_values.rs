//! Integration tests for projects, users and the value ledger.

mod common;

use alliswell_core::access::ListScope;
use alliswell_core::project::ProjectStatus;
use alliswell_core::roles::Role;
use alliswell_core::types::Timestamp;
use alliswell_core::week::DateRange;
use alliswell_db::models::project::UpdateProject;
use alliswell_db::models::project_value::CreateProjectValue;
use alliswell_db::repositories::{ProjectRepo, ProjectValueRepo, UserRepo};
use common::{create_project, date, new_project, new_user, test_pool};
use sqlx::error::ErrorKind;

fn ts(raw: &str) -> Timestamp {
    raw.parse().unwrap()
}

fn value_at(project_id: i64, submitted_by: i64, content: &str, at: &str) -> CreateProjectValue {
    CreateProjectValue {
        project_id,
        content: content.to_string(),
        submitted_by,
        created_at: Some(ts(at)),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_project_defaults_to_active() {
    let pool = test_pool().await;
    let d1 = new_user(&pool, "Dana One", Role::DeliveryDirector).await;

    let project = ProjectRepo::create(&pool, &new_project("Apollo", Some(d1.id)))
        .await
        .unwrap();

    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.start_date, date("2024-06-03"));
    assert_eq!(project.director_name.as_deref(), Some("Dana One"));
}

#[tokio::test]
async fn test_duplicate_project_name_is_unique_violation() {
    let pool = test_pool().await;
    create_project(&pool, "Apollo", None).await;

    let err = ProjectRepo::create(&pool, &new_project("Apollo", None))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.kind(), ErrorKind::UniqueViolation);
    assert!(db_err.message().contains("projects.name"));
}

#[tokio::test]
async fn test_update_keeps_unspecified_fields() {
    let pool = test_pool().await;
    let id = create_project(&pool, "Apollo", None).await;

    let updated = ProjectRepo::update(
        &pool,
        id,
        &UpdateProject {
            status: Some(ProjectStatus::OnHold),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.status, ProjectStatus::OnHold);
    assert_eq!(updated.name, "Apollo");
    assert_eq!(updated.client, "Apollo Client");

    assert!(ProjectRepo::update(&pool, 9999, &UpdateProject::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_list_projects_by_scope_and_status() {
    let pool = test_pool().await;
    let d1 = new_user(&pool, "Dana One", Role::DeliveryDirector).await;
    create_project(&pool, "Zephyr", Some(d1.id)).await;
    create_project(&pool, "Apollo", Some(d1.id)).await;
    let hold = create_project(&pool, "Borealis", None).await;
    ProjectRepo::update(
        &pool,
        hold,
        &UpdateProject {
            status: Some(ProjectStatus::OnHold),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let all = ProjectRepo::list(&pool, ListScope::All, None).await.unwrap();
    let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Apollo", "Borealis", "Zephyr"]);

    let mine = ProjectRepo::list(&pool, ListScope::Director(d1.id), None).await.unwrap();
    assert_eq!(mine.len(), 2);

    let on_hold = ProjectRepo::list(&pool, ListScope::All, Some(ProjectStatus::OnHold))
        .await
        .unwrap();
    assert_eq!(on_hold.len(), 1);
    assert_eq!(on_hold[0].id, hold);

    assert!(ProjectRepo::list(&pool, ListScope::Nothing, None).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_directors_listing_skips_inactive_users() {
    let pool = test_pool().await;
    let d1 = new_user(&pool, "Dana One", Role::DeliveryDirector).await;
    let d2 = new_user(&pool, "Dev Two", Role::DeliveryDirector).await;
    new_user(&pool, "Ada Admin", Role::Admin).await;

    assert!(UserRepo::set_active(&pool, d2.id, false).await.unwrap());

    let directors = UserRepo::list_active_by_role(&pool, Role::DeliveryDirector)
        .await
        .unwrap();
    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].id, d1.id);

    let found = UserRepo::find_by_email(&pool, "dev.two@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(!found.is_active);
}

// ---------------------------------------------------------------------------
// Value ledger
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_range_includes_the_whole_last_day() {
    let pool = test_pool().await;
    let admin = new_user(&pool, "Ada Admin", Role::Admin).await;
    let project = create_project(&pool, "Apollo", None).await;

    for (content, at) in [
        ("before", "2025-01-05T23:59:59.999Z"),
        ("first day", "2025-01-06T00:00:00Z"),
        ("late friday", "2025-01-10T23:59:59Z"),
        ("saturday", "2025-01-11T00:00:01Z"),
    ] {
        ProjectValueRepo::create(&pool, &value_at(project, admin.id, content, at))
            .await
            .unwrap();
    }

    let range = DateRange::new(Some(date("2025-01-06")), Some(date("2025-01-10"))).unwrap();
    let values = ProjectValueRepo::list(&pool, ListScope::All, &range).await.unwrap();
    let contents: Vec<_> = values.iter().map(|v| v.content.as_str()).collect();
    assert_eq!(contents, ["late friday", "first day"]);

    let open = ProjectValueRepo::list(&pool, ListScope::All, &DateRange::default())
        .await
        .unwrap();
    assert_eq!(open.len(), 4);
}

#[tokio::test]
async fn test_values_default_to_now_and_list_newest_first() {
    let pool = test_pool().await;
    let admin = new_user(&pool, "Ada Admin", Role::Admin).await;
    let project = create_project(&pool, "Apollo", None).await;

    ProjectValueRepo::create(&pool, &value_at(project, admin.id, "old", "2024-12-02T09:00:00Z"))
        .await
        .unwrap();
    let fresh = ProjectValueRepo::create(
        &pool,
        &CreateProjectValue {
            project_id: project,
            content: "new".to_string(),
            submitted_by: admin.id,
            created_at: None,
        },
    )
    .await
    .unwrap();

    assert!(fresh.created_at > ts("2025-01-01T00:00:00Z"));
    assert_eq!(fresh.submitted_by_name, "Ada Admin");

    let values = ProjectValueRepo::list_for_project(&pool, project).await.unwrap();
    assert_eq!(values[0].content, "new");
    assert_eq!(values[1].content, "old");
}

#[tokio::test]
async fn test_value_scope_follows_assignment_or_submitter() {
    let pool = test_pool().await;
    let d1 = new_user(&pool, "Dana One", Role::DeliveryDirector).await;
    let d2 = new_user(&pool, "Dev Two", Role::DeliveryDirector).await;
    let apollo = create_project(&pool, "Apollo", Some(d1.id)).await;
    let borealis = create_project(&pool, "Borealis", Some(d2.id)).await;

    ProjectValueRepo::create(&pool, &value_at(apollo, d1.id, "a", "2025-01-06T10:00:00Z"))
        .await
        .unwrap();
    ProjectValueRepo::create(&pool, &value_at(borealis, d2.id, "b", "2025-01-06T10:00:00Z"))
        .await
        .unwrap();

    let range = DateRange::default();
    let mine = ProjectValueRepo::list(&pool, ListScope::Director(d1.id), &range)
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].project_name, "Apollo");
}

#[tokio::test]
async fn test_blank_value_rejected_by_storage() {
    let pool = test_pool().await;
    let admin = new_user(&pool, "Ada Admin", Role::Admin).await;
    let project = create_project(&pool, "Apollo", None).await;

    let result = ProjectValueRepo::create(
        &pool,
        &CreateProjectValue {
            project_id: project,
            content: "   ".to_string(),
            submitted_by: admin.id,
            created_at: None,
        },
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_value() {
    let pool = test_pool().await;
    let admin = new_user(&pool, "Ada Admin", Role::Admin).await;
    let project = create_project(&pool, "Apollo", None).await;
    let value = ProjectValueRepo::create(
        &pool,
        &value_at(project, admin.id, "x", "2025-01-06T10:00:00Z"),
    )
    .await
    .unwrap();

    assert!(ProjectValueRepo::delete(&pool, value.id).await.unwrap());
    assert!(ProjectValueRepo::find_by_id(&pool, value.id).await.unwrap().is_none());
    assert!(!ProjectValueRepo::delete(&pool, value.id).await.unwrap());
}
