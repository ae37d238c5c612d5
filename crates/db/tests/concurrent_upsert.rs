//! Concurrent saves for the same (project, week) against a file-backed
//! database with several pooled connections.

mod common;

use alliswell_core::roles::Role;
use alliswell_core::status_report::{OverallStatus, StatusContent};
use alliswell_db::models::weekly_status::UpsertWeeklyStatus;
use alliswell_db::repositories::WeeklyStatusRepo;
use common::{create_project, date, new_user};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_upserts_leave_one_consistent_row() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("concurrent.db").display());
    let pool = alliswell_db::create_pool(&url, 4).await.unwrap();
    alliswell_db::run_migrations(&pool).await.unwrap();

    let d1 = new_user(&pool, "Dana One", Role::DeliveryDirector).await;
    let project = create_project(&pool, "Apollo", Some(d1.id)).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let pool = pool.clone();
        let submitted_by = d1.id;
        handles.push(tokio::spawn(async move {
            let mut content = StatusContent::new(OverallStatus::Green, format!("writer {i}"));
            content.risks = Some(format!("risk from writer {i}"));
            WeeklyStatusRepo::upsert(
                &pool,
                &UpsertWeeklyStatus {
                    project_id: project,
                    week_ending_date: date("2025-01-10"),
                    submitted_by,
                    is_draft: false,
                    content,
                },
            )
            .await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.dedup();
    assert_eq!(ids.len(), 1, "every save must hit the same row");

    let count = WeeklyStatusRepo::count_for_project_week(&pool, project, date("2025-01-10"))
        .await
        .unwrap();
    assert_eq!(count, 1);

    // The surviving row holds one writer's content, never a mix.
    let stored = WeeklyStatusRepo::find_by_id(&pool, ids[0]).await.unwrap().unwrap();
    let writer = stored.all_is_well.trim_start_matches("writer ");
    assert_eq!(stored.risks, Some(format!("risk from writer {writer}")));
}
