//! In-memory implementation of the persistence port.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use planner_core::types::DocumentId;
use tokio::sync::RwLock;

use crate::models::milestone::{Attachment, Milestone, MilestoneDocument, MilestoneUpdate};
use crate::port::{MilestoneStore, StoreError};

/// Milestone store held entirely in process memory.
///
/// Documents sit in a `BTreeMap` keyed by a monotonically assigned id, so
/// map iteration order equals insertion order. Intended as the test
/// substitute for [`crate::pg::PgMilestoneStore`].
#[derive(Debug, Default)]
pub struct MemoryMilestoneStore {
    next_id: AtomicI64,
    documents: RwLock<BTreeMap<i64, MilestoneDocument>>,
}

impl MemoryMilestoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

fn apply_patch(doc: &mut MilestoneDocument, patch: &MilestoneUpdate) {
    if let Some(title) = &patch.title {
        doc.title = title.clone();
    }
    if let Some(description) = &patch.description {
        doc.description = Some(description.clone());
    }
    if let Some(start_date) = patch.start_date {
        doc.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
        doc.end_date = Some(end_date);
    }
    if let Some(priority) = patch.priority {
        doc.priority = priority;
    }
    if let Some(completed) = patch.completed {
        doc.completed = completed;
    }
    if let Some(progress) = patch.progress {
        doc.progress = progress;
    }
    if let Some(notes) = &patch.notes {
        doc.notes = Some(notes.clone());
    }
    if let Some(reminder_time) = &patch.reminder_time {
        doc.reminder_time = Some(reminder_time.clone());
    }
    if let Some(subtasks) = &patch.subtasks {
        doc.subtasks = subtasks.clone();
    }
}

#[async_trait]
impl MilestoneStore for MemoryMilestoneStore {
    async fn insert(&self, doc: &MilestoneDocument) -> Result<DocumentId, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.documents.write().await.insert(id, doc.clone());
        Ok(DocumentId::new(id))
    }

    async fn find(&self, project_id: Option<&str>) -> Result<Vec<Milestone>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|(_, doc)| match project_id {
                Some(project) => doc.project_id.as_deref() == Some(project),
                None => true,
            })
            .map(|(&id, doc)| Milestone {
                id: DocumentId::new(id),
                doc: doc.clone(),
            })
            .collect())
    }

    async fn update_one(&self, id: DocumentId, patch: &MilestoneUpdate) -> Result<(), StoreError> {
        if let Some(doc) = self.documents.write().await.get_mut(&id.as_i64()) {
            apply_patch(doc, patch);
        }
        Ok(())
    }

    async fn push_attachment(
        &self,
        id: DocumentId,
        attachment: &Attachment,
    ) -> Result<(), StoreError> {
        if let Some(doc) = self.documents.write().await.get_mut(&id.as_i64()) {
            doc.attachments.push(attachment.clone());
        }
        Ok(())
    }

    async fn delete_one(&self, id: DocumentId) -> Result<(), StoreError> {
        self.documents.write().await.remove(&id.as_i64());
        Ok(())
    }

    async fn delete_by_project(&self, project_id: &str) -> Result<u64, StoreError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|_, doc| doc.project_id.as_deref() != Some(project_id));
        Ok((before - documents.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
