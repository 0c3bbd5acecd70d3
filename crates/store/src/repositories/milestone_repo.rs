//! Repository for milestone documents.

use planner_core::error::CoreError;
use planner_core::types::DocumentId;

use crate::models::milestone::{CreateMilestone, Milestone, MilestoneDocument, MilestoneUpdate};
use crate::port::MilestoneStore;

/// CRUD operations over the persistence port, carrying the domain's
/// validation and identifier rules.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// List milestones in insertion order, optionally restricted to one
    /// project scope.
    pub async fn list(
        store: &dyn MilestoneStore,
        project_id: Option<&str>,
    ) -> Result<Vec<Milestone>, CoreError> {
        Ok(store.find(project_id).await?)
    }

    /// Insert a new milestone. `title` and `start_date` are both required;
    /// the attachment list always starts empty.
    pub async fn create(
        store: &dyn MilestoneStore,
        input: &CreateMilestone,
    ) -> Result<DocumentId, CoreError> {
        let start_date = match input.start_date {
            Some(date) if !input.title.trim().is_empty() => date,
            _ => {
                return Err(CoreError::Validation(
                    "title and start_date are required".into(),
                ))
            }
        };

        let doc = MilestoneDocument {
            title: input.title.clone(),
            start_date,
            end_date: input.end_date,
            description: input.description.clone(),
            notes: input.notes.clone(),
            project_id: input.project_id.clone(),
            is_milestone: input.is_milestone,
            priority: input.priority,
            completed: input.completed,
            progress: input.progress,
            subtasks: input.subtasks.clone(),
            attachments: Vec::new(),
            reminder_time: input.reminder_time.clone(),
        };
        Ok(store.insert(&doc).await?)
    }

    /// Apply a partial update.
    ///
    /// Rejects an empty patch and an unparsable id; an id that matches no
    /// document is a silent no-op success.
    pub async fn update(
        store: &dyn MilestoneStore,
        id: &str,
        patch: &MilestoneUpdate,
    ) -> Result<(), CoreError> {
        if patch.is_empty() {
            return Err(CoreError::Validation(
                "no updatable fields in request body".into(),
            ));
        }
        let doc_id: DocumentId = id
            .parse()
            .map_err(|_| CoreError::InvalidId(id.to_string()))?;
        Ok(store.update_one(doc_id, patch).await?)
    }

    /// Delete by id. Never fails on client input: a malformed or unknown
    /// id is treated as already deleted. Looser than `update`'s id
    /// handling; the repo tests name this asymmetry.
    pub async fn delete(store: &dyn MilestoneStore, id: &str) -> Result<(), CoreError> {
        let Ok(doc_id) = id.parse::<DocumentId>() else {
            return Ok(());
        };
        Ok(store.delete_one(doc_id).await?)
    }
}
