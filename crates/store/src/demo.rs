//! Demo data seeding for environment bootstrapping.
//!
//! The seed and reset catalogues intentionally differ (four vs three
//! entries). Each is a versioned fixture: add a v2 alongside rather than
//! editing a catalogue in place.

use chrono::NaiveDate;
use planner_core::error::CoreError;
use planner_core::types::{DocumentId, Priority, Progress};

use crate::models::milestone::{MilestoneDocument, Subtask};
use crate::port::MilestoneStore;

/// Project scope used when a seed/reset request names none.
pub const DEFAULT_PROJECT_ID: &str = "demo-project";

/// Seeds and resets the fixed demonstration data set for a project scope.
pub struct DemoData;

impl DemoData {
    /// Insert the v1 seed catalogue (four milestones) into `project_id`,
    /// returning the assigned ids in insertion order.
    ///
    /// Not idempotent: each call inserts a fresh copy.
    pub async fn seed(
        store: &dyn MilestoneStore,
        project_id: &str,
    ) -> Result<Vec<DocumentId>, CoreError> {
        Self::insert_catalogue(store, seed_catalogue_v1(project_id)).await
    }

    /// Clear `project_id` and insert the v1 reset catalogue (three
    /// milestones). Delete faults are logged and swallowed so the reset
    /// always reaches the insert step.
    pub async fn reset(
        store: &dyn MilestoneStore,
        project_id: &str,
    ) -> Result<Vec<DocumentId>, CoreError> {
        if let Err(err) = store.delete_by_project(project_id).await {
            tracing::warn!(project_id, error = %err, "Failed to clear project scope before reseeding");
        }
        Self::insert_catalogue(store, reset_catalogue_v1(project_id)).await
    }

    async fn insert_catalogue(
        store: &dyn MilestoneStore,
        docs: Vec<MilestoneDocument>,
    ) -> Result<Vec<DocumentId>, CoreError> {
        let mut inserted = Vec::with_capacity(docs.len());
        for doc in &docs {
            inserted.push(store.insert(doc).await?);
        }
        Ok(inserted)
    }
}

/// Fixture dates are compile-time constants.
fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn demo_milestone(
    project_id: &str,
    title: &str,
    start: NaiveDate,
    end: Option<NaiveDate>,
    priority: Priority,
    progress: u8,
    subtasks: Vec<Subtask>,
) -> MilestoneDocument {
    MilestoneDocument {
        title: title.to_string(),
        start_date: start,
        end_date: end,
        description: None,
        notes: None,
        project_id: Some(project_id.to_string()),
        is_milestone: true,
        priority,
        completed: false,
        progress: Progress::clamp(progress),
        subtasks,
        attachments: Vec::new(),
        reminder_time: None,
    }
}

fn subtask(title: &str, done: bool) -> Subtask {
    Subtask {
        title: title.to_string(),
        done,
    }
}

/// Four-entry catalogue inserted by `seed`.
pub fn seed_catalogue_v1(project_id: &str) -> Vec<MilestoneDocument> {
    vec![
        demo_milestone(
            project_id,
            "Project kickoff",
            demo_date(2025, 1, 6),
            Some(demo_date(2025, 1, 10)),
            Priority::High,
            100,
            vec![
                subtask("Confirm stakeholders", true),
                subtask("Agree on scope", true),
            ],
        ),
        demo_milestone(
            project_id,
            "Requirements sign-off",
            demo_date(2025, 1, 20),
            Some(demo_date(2025, 2, 7)),
            Priority::Medium,
            60,
            vec![subtask("Draft requirements", true), subtask("Review", false)],
        ),
        demo_milestone(
            project_id,
            "Beta release",
            demo_date(2025, 3, 3),
            Some(demo_date(2025, 3, 28)),
            Priority::High,
            10,
            vec![],
        ),
        demo_milestone(
            project_id,
            "Launch",
            demo_date(2025, 5, 1),
            None,
            Priority::Low,
            0,
            vec![],
        ),
    ]
}

/// Three-entry catalogue inserted by `reset`. A strict subset of the seed
/// titles, kept asymmetric on purpose.
pub fn reset_catalogue_v1(project_id: &str) -> Vec<MilestoneDocument> {
    vec![
        demo_milestone(
            project_id,
            "Project kickoff",
            demo_date(2025, 1, 6),
            Some(demo_date(2025, 1, 10)),
            Priority::High,
            100,
            vec![
                subtask("Confirm stakeholders", true),
                subtask("Agree on scope", true),
            ],
        ),
        demo_milestone(
            project_id,
            "Beta release",
            demo_date(2025, 3, 3),
            Some(demo_date(2025, 3, 28)),
            Priority::High,
            10,
            vec![],
        ),
        demo_milestone(
            project_id,
            "Launch",
            demo_date(2025, 5, 1),
            None,
            Priority::Low,
            0,
            vec![],
        ),
    ]
}
