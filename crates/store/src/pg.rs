//! Postgres implementation of the persistence port.
//!
//! Milestones live in a single `milestones` table as a JSONB document
//! column keyed by a BIGSERIAL id, so the stored shape stays aligned with
//! the API model without a per-field schema. Partial updates are JSONB
//! merges; the attachment append is a single `jsonb_set` statement.

use async_trait::async_trait;
use planner_core::types::DocumentId;
use sqlx::PgPool;

use crate::models::milestone::{Attachment, Milestone, MilestoneDocument, MilestoneUpdate};
use crate::port::{MilestoneStore, StoreError};

/// Milestone store backed by the `milestones` JSONB table.
#[derive(Clone)]
pub struct PgMilestoneStore {
    pool: PgPool,
}

impl PgMilestoneStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MilestoneStore for PgMilestoneStore {
    async fn insert(&self, doc: &MilestoneDocument) -> Result<DocumentId, StoreError> {
        let doc_json = serde_json::to_value(doc)?;
        let id: i64 = sqlx::query_scalar("INSERT INTO milestones (doc) VALUES ($1) RETURNING id")
            .bind(doc_json)
            .fetch_one(&self.pool)
            .await?;
        Ok(DocumentId::new(id))
    }

    async fn find(&self, project_id: Option<&str>) -> Result<Vec<Milestone>, StoreError> {
        let rows: Vec<(i64, serde_json::Value)> = match project_id {
            Some(project) => {
                sqlx::query_as(
                    "SELECT id, doc FROM milestones WHERE doc->>'project_id' = $1 ORDER BY id",
                )
                .bind(project)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT id, doc FROM milestones ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter()
            .map(|(id, doc)| {
                Ok(Milestone {
                    id: DocumentId::new(id),
                    doc: serde_json::from_value(doc)?,
                })
            })
            .collect()
    }

    async fn update_one(&self, id: DocumentId, patch: &MilestoneUpdate) -> Result<(), StoreError> {
        let patch_json = serde_json::to_value(patch)?;
        sqlx::query("UPDATE milestones SET doc = doc || $2 WHERE id = $1")
            .bind(id.as_i64())
            .bind(patch_json)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn push_attachment(
        &self,
        id: DocumentId,
        attachment: &Attachment,
    ) -> Result<(), StoreError> {
        let attachment_json = serde_json::to_value(attachment)?;
        sqlx::query(
            "UPDATE milestones
             SET doc = jsonb_set(doc, '{attachments}',
                                 COALESCE(doc->'attachments', '[]'::jsonb) || $2)
             WHERE id = $1",
        )
        .bind(id.as_i64())
        .bind(attachment_json)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_one(&self, id: DocumentId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM milestones WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_project(&self, project_id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM milestones WHERE doc->>'project_id' = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
