//! Handlers for milestone file attachments.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use planner_store::attachments::AttachmentLinker;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for a successful attachment upload.
#[derive(Debug, Serialize)]
pub struct AttachResult {
    pub message: &'static str,
    pub url: String,
}

/// POST /api/milestones/{id}/attachments
///
/// Expects a multipart body with a `file` field. The file is stored under
/// its sanitized name and the reference appended to the milestone's
/// attachment list.
pub async fn upload(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<AttachResult>> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let attachment = AttachmentLinker::attach(
        state.store.as_ref(),
        state.files.as_ref(),
        &id,
        &filename,
        &data,
    )
    .await?;

    Ok(Json(AttachResult {
        message: "Attachment uploaded",
        url: attachment.url,
    }))
}
