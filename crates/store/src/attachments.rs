//! Links uploaded files to milestone attachment lists.

use planner_core::error::CoreError;
use planner_core::sanitize::sanitize_filename;
use planner_core::types::DocumentId;

use crate::files::FileStore;
use crate::models::milestone::Attachment;
use crate::port::MilestoneStore;

/// Appends a file reference to a milestone after the file itself is
/// durably stored.
pub struct AttachmentLinker;

impl AttachmentLinker {
    /// Store `bytes` under the sanitized filename and append the reference
    /// to the milestone's attachment list.
    ///
    /// The file write completes before the reference append; a crash
    /// between the two steps can leave an orphaned file but never a
    /// dangling reference.
    pub async fn attach(
        store: &dyn MilestoneStore,
        files: &dyn FileStore,
        id: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<Attachment, CoreError> {
        let doc_id: DocumentId = id
            .parse()
            .map_err(|_| CoreError::InvalidId(id.to_string()))?;

        if bytes.is_empty() {
            return Err(CoreError::Validation("uploaded file is empty".into()));
        }

        let name = sanitize_filename(filename);
        if name.is_empty() {
            return Err(CoreError::Validation(
                "uploaded file has no usable filename".into(),
            ));
        }

        files
            .save(&name, bytes)
            .await
            .map_err(|err| CoreError::Internal(format!("failed to store '{name}': {err}")))?;

        let attachment = Attachment {
            url: format!("/uploads/{name}"),
            filename: name,
        };
        store.push_attachment(doc_id, &attachment).await?;
        Ok(attachment)
    }
}
