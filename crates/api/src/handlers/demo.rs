//! Handlers for the demo data lifecycle endpoints.

use axum::extract::State;
use axum::Json;
use planner_core::types::DocumentId;
use planner_store::demo::{DemoData, DEFAULT_PROJECT_ID};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Response for the seed endpoint.
#[derive(Debug, Serialize)]
pub struct SeedResult {
    pub inserted: Vec<DocumentId>,
}

/// Request body for the reset endpoint; the project scope is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ResetRequest {
    pub project_id: Option<String>,
}

/// Response for the reset endpoint.
#[derive(Debug, Serialize)]
pub struct ResetResult {
    pub reset: bool,
    pub inserted: Vec<DocumentId>,
}

/// POST /api/seed-demo
pub async fn seed(State(state): State<AppState>) -> AppResult<Json<SeedResult>> {
    let inserted = DemoData::seed(state.store.as_ref(), DEFAULT_PROJECT_ID).await?;
    Ok(Json(SeedResult { inserted }))
}

/// POST /api/reset-demo
pub async fn reset(
    State(state): State<AppState>,
    body: Option<Json<ResetRequest>>,
) -> AppResult<Json<ResetResult>> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let project_id = request
        .project_id
        .unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string());
    let inserted = DemoData::reset(state.store.as_ref(), &project_id).await?;
    Ok(Json(ResetResult {
        reset: true,
        inserted,
    }))
}
