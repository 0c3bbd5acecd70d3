//! Placeholder reminder endpoint.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Optional body for the reminder endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RemindRequest {
    pub reminder_time: Option<String>,
}

/// POST /api/milestones/{id}/remind
///
/// Hands the request to the scheduler seam and acknowledges. The default
/// scheduler performs no scheduling.
pub async fn remind(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<RemindRequest>>,
) -> AppResult<Json<MessageResponse>> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    state
        .reminders
        .schedule(&id, request.reminder_time.as_deref())
        .await;
    Ok(Json(MessageResponse {
        message: "Reminder acknowledged",
    }))
}
