//! Milestone entity model and DTOs.

use chrono::NaiveDate;
use planner_core::types::{DocumentId, Priority, Progress};
use serde::{Deserialize, Serialize};

/// Inline child checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// Reference to a file stored outside the milestone record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub url: String,
}

/// The stored milestone fields, minus the store-assigned id.
///
/// This is the exact shape persisted as the document body; the id travels
/// separately as the store's key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneDocument {
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub is_milestone: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub progress: Progress,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub reminder_time: Option<String>,
}

/// A milestone as returned by the API: the document fields plus the id,
/// rendered as a string.
#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub id: DocumentId,
    #[serde(flatten)]
    pub doc: MilestoneDocument,
}

/// DTO for creating a milestone.
///
/// `title` and `start_date` carry serde defaults so that omitting either
/// surfaces as the repository's single combined validation error instead
/// of a serde missing-field error. Attachments are absent: the list starts
/// empty and grows only through the attachment linker.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMilestone {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub is_milestone: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub progress: Progress,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub reminder_time: Option<String>,
}

/// Partial-update DTO. The field set IS the mutation allow-list: anything
/// not listed here (notably `attachments`) cannot be touched through the
/// general update path. Unknown body keys are ignored by serde, so a
/// request carrying only unknown keys decodes to an empty patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MilestoneUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    /// Whole-list replace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Subtask>>,
}

impl MilestoneUpdate {
    /// True when no allow-listed field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.priority.is_none()
            && self.completed.is_none()
            && self.progress.is_none()
            && self.notes.is_none()
            && self.reminder_time.is_none()
            && self.subtasks.is_none()
    }
}
