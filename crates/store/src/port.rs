//! The persistence port: an abstract milestone document collection.

use async_trait::async_trait;
use planner_core::error::CoreError;
use planner_core::types::DocumentId;

use crate::models::milestone::{Attachment, Milestone, MilestoneDocument, MilestoneUpdate};

/// Backend fault from a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Internal(err.to_string())
    }
}

/// Persistence port for milestone documents.
///
/// Implementations are interchangeable behind `Arc<dyn MilestoneStore>`.
/// Identifier parsing happens above this seam; every method takes an
/// already-validated [`DocumentId`].
#[async_trait]
pub trait MilestoneStore: Send + Sync {
    /// Insert a document, returning the assigned id.
    async fn insert(&self, doc: &MilestoneDocument) -> Result<DocumentId, StoreError>;

    /// All documents in insertion order, optionally restricted to one
    /// project scope.
    async fn find(&self, project_id: Option<&str>) -> Result<Vec<Milestone>, StoreError>;

    /// Apply the set fields of `patch` to one document. Matching nothing
    /// is not an error.
    async fn update_one(&self, id: DocumentId, patch: &MilestoneUpdate) -> Result<(), StoreError>;

    /// Append one entry to a document's attachment list. Matching nothing
    /// is not an error.
    async fn push_attachment(
        &self,
        id: DocumentId,
        attachment: &Attachment,
    ) -> Result<(), StoreError>;

    /// Delete at most one document. Matching nothing is not an error.
    async fn delete_one(&self, id: DocumentId) -> Result<(), StoreError>;

    /// Delete every document in a project scope, returning the count
    /// removed.
    async fn delete_by_project(&self, project_id: &str) -> Result<u64, StoreError>;

    /// Verify the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
