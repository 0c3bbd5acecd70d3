//! Handlers for the `/milestones` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use planner_core::error::CoreError;
use planner_store::models::milestone::{CreateMilestone, Milestone, MilestoneUpdate};
use planner_store::repositories::MilestoneRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query parameters for the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub project_id: Option<String>,
}

/// Decode a JSON body into `T`, mapping decode failures to a 400
/// validation error. Axum's typed-Json rejection would answer 422, but
/// every invalid-input response on this surface is a 400.
fn decode<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> Result<T, CoreError> {
    serde_json::from_value(body).map_err(|err| CoreError::Validation(err.to_string()))
}

/// GET /api/milestones
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Milestone>>> {
    let milestones =
        MilestoneRepo::list(state.store.as_ref(), params.project_id.as_deref()).await?;
    Ok(Json(milestones))
}

/// POST /api/milestones
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input: CreateMilestone = decode(body)?;
    MilestoneRepo::create(state.store.as_ref(), &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Milestone created",
        }),
    ))
}

/// PUT /api/milestones/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<MessageResponse>> {
    let patch: MilestoneUpdate = decode(body)?;
    MilestoneRepo::update(state.store.as_ref(), &id, &patch).await?;
    Ok(Json(MessageResponse {
        message: "Milestone updated",
    }))
}

/// DELETE /api/milestones/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    MilestoneRepo::delete(state.store.as_ref(), &id).await?;
    Ok(Json(MessageResponse {
        message: "Milestone deleted",
    }))
}
