//! Repository-level tests for milestone CRUD semantics.
//!
//! Exercises the repository against the in-memory store:
//! - create validation (title + start_date required)
//! - list filtering by project scope, insertion order
//! - allow-list update semantics, empty-patch rejection, missing-id no-op
//! - the deliberately asymmetric id handling of update vs delete

use assert_matches::assert_matches;
use chrono::NaiveDate;
use planner_core::error::CoreError;
use planner_core::types::{Priority, Progress};
use planner_store::memory::MemoryMilestoneStore;
use planner_store::models::milestone::{CreateMilestone, MilestoneUpdate, Subtask};
use planner_store::repositories::MilestoneRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_milestone(title: &str, project_id: Option<&str>) -> CreateMilestone {
    CreateMilestone {
        title: title.to_string(),
        start_date: Some(date(2025, 6, 1)),
        project_id: project_id.map(str::to_string),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_requires_title_and_start_date() {
    let store = MemoryMilestoneStore::new();

    let missing_title = CreateMilestone {
        start_date: Some(date(2025, 6, 1)),
        ..Default::default()
    };
    let err = MilestoneRepo::create(&store, &missing_title).await.unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    let missing_date = CreateMilestone {
        title: "Alpha".into(),
        ..Default::default()
    };
    let err = MilestoneRepo::create(&store, &missing_date).await.unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    // Whitespace-only titles count as missing.
    let blank_title = CreateMilestone {
        title: "   ".into(),
        start_date: Some(date(2025, 6, 1)),
        ..Default::default()
    };
    let err = MilestoneRepo::create(&store, &blank_title).await.unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_returns_id_retrievable_via_list() {
    let store = MemoryMilestoneStore::new();
    let id = MilestoneRepo::create(&store, &new_milestone("Alpha", None))
        .await
        .unwrap();

    let all = MilestoneRepo::list(&store, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].doc.title, "Alpha");
    assert!(all[0].doc.attachments.is_empty());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_filters_by_project_in_insertion_order() {
    let store = MemoryMilestoneStore::new();
    MilestoneRepo::create(&store, &new_milestone("A1", Some("alpha")))
        .await
        .unwrap();
    MilestoneRepo::create(&store, &new_milestone("B1", Some("beta")))
        .await
        .unwrap();
    MilestoneRepo::create(&store, &new_milestone("A2", Some("alpha")))
        .await
        .unwrap();
    MilestoneRepo::create(&store, &new_milestone("Orphan", None))
        .await
        .unwrap();

    let alpha = MilestoneRepo::list(&store, Some("alpha")).await.unwrap();
    let titles: Vec<_> = alpha.iter().map(|m| m.doc.title.as_str()).collect();
    assert_eq!(titles, ["A1", "A2"]);

    let all = MilestoneRepo::list(&store, None).await.unwrap();
    assert_eq!(all.len(), 4);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_applies_only_provided_fields() {
    let store = MemoryMilestoneStore::new();
    let id = MilestoneRepo::create(&store, &new_milestone("Alpha", None))
        .await
        .unwrap();

    let patch = MilestoneUpdate {
        completed: Some(true),
        progress: Some(Progress::new(75).unwrap()),
        priority: Some(Priority::High),
        subtasks: Some(vec![Subtask {
            title: "Write docs".into(),
            done: false,
        }]),
        ..Default::default()
    };
    MilestoneRepo::update(&store, &id.to_string(), &patch)
        .await
        .unwrap();

    let all = MilestoneRepo::list(&store, None).await.unwrap();
    let updated = &all[0].doc;
    assert_eq!(updated.title, "Alpha");
    assert!(updated.completed);
    assert_eq!(updated.progress.percent(), 75);
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.subtasks.len(), 1);
}

#[tokio::test]
async fn update_rejects_empty_patch() {
    let store = MemoryMilestoneStore::new();
    let id = MilestoneRepo::create(&store, &new_milestone("Alpha", None))
        .await
        .unwrap();

    let err = MilestoneRepo::update(&store, &id.to_string(), &MilestoneUpdate::default())
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    // The stored record is untouched.
    let all = MilestoneRepo::list(&store, None).await.unwrap();
    assert_eq!(all[0].doc.title, "Alpha");
    assert!(!all[0].doc.completed);
}

#[tokio::test]
async fn update_rejects_malformed_id() {
    let store = MemoryMilestoneStore::new();
    MilestoneRepo::create(&store, &new_milestone("Alpha", None))
        .await
        .unwrap();

    let patch = MilestoneUpdate {
        completed: Some(true),
        ..Default::default()
    };
    let err = MilestoneRepo::update(&store, "not-an-id", &patch)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::InvalidId(_));

    let all = MilestoneRepo::list(&store, None).await.unwrap();
    assert!(!all[0].doc.completed);
}

#[tokio::test]
async fn update_on_missing_id_is_a_silent_success() {
    let store = MemoryMilestoneStore::new();
    let patch = MilestoneUpdate {
        completed: Some(true),
        ..Default::default()
    };
    MilestoneRepo::update(&store, "999999", &patch).await.unwrap();
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_one_document() {
    let store = MemoryMilestoneStore::new();
    let id = MilestoneRepo::create(&store, &new_milestone("Alpha", None))
        .await
        .unwrap();
    MilestoneRepo::create(&store, &new_milestone("Beta", None))
        .await
        .unwrap();

    MilestoneRepo::delete(&store, &id.to_string()).await.unwrap();

    let all = MilestoneRepo::list(&store, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].doc.title, "Beta");
}

#[tokio::test]
async fn delete_succeeds_on_missing_and_malformed_ids() {
    // Deliberate asymmetry with `update`: delete treats malformed ids as
    // already deleted instead of rejecting them.
    let store = MemoryMilestoneStore::new();
    MilestoneRepo::delete(&store, "999999").await.unwrap();
    MilestoneRepo::delete(&store, "not-an-id").await.unwrap();
}
