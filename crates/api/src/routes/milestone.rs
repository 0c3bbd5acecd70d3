//! Route definitions for the `/milestones` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{attachment, milestone, reminder};
use crate::state::AppState;

/// Routes mounted at `/milestones`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// POST   /{id}/attachments     -> attachment upload
/// POST   /{id}/remind          -> reminder stub
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(milestone::list).post(milestone::create))
        .route("/{id}", put(milestone::update).delete(milestone::delete))
        .route("/{id}/attachments", post(attachment::upload))
        .route("/{id}/remind", post(reminder::remind))
}
